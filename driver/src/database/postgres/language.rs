use sqlx::PgConnection;

use kernel::interface::query::LanguageQuery;
use kernel::prelude::entity::{Language, LanguageId, LanguageName};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresLanguageRepository;

#[async_trait::async_trait]
impl LanguageQuery for PostgresLanguageRepository {
    type Transaction = PostgresTransaction;

    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &LanguageId,
    ) -> error_stack::Result<Option<Language>, KernelError> {
        PgLanguageInternal::find_by_id(con, id).await
    }
}

#[derive(sqlx::FromRow)]
struct LanguageRow {
    id: i64,
    name: String,
}

impl From<LanguageRow> for Language {
    fn from(value: LanguageRow) -> Self {
        Language::new(LanguageId::new(value.id), LanguageName::new(value.name))
    }
}

pub(in crate::database) struct PgLanguageInternal;

impl PgLanguageInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &LanguageId,
    ) -> error_stack::Result<Option<Language>, KernelError> {
        let row = sqlx::query_as::<_, LanguageRow>(
            // language=postgresql
            r#"
            SELECT id, name
            FROM languages
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Language::from))
    }
}

#[cfg(test)]
mod test {
    use uuid::Uuid;

    use kernel::interface::database::DatabaseConnection;
    use kernel::interface::query::LanguageQuery;
    use kernel::prelude::entity::LanguageId;
    use kernel::KernelError;

    use crate::database::postgres::fixture;
    use crate::database::postgres::{PostgresDatabase, PostgresLanguageRepository};

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn find_by_id() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        let mut con = db.transact().await?;
        let name = format!("Esperanto {}", Uuid::new_v4());

        let id = fixture::insert_language(&mut con, &name).await?;
        let found = PostgresLanguageRepository.find_by_id(&mut con, &id).await?;
        assert_eq!(found.map(|language| language.name().as_ref().clone()), Some(name));

        let missing = PostgresLanguageRepository
            .find_by_id(&mut con, &LanguageId::new(-1))
            .await?;
        assert!(missing.is_none());
        Ok(())
    }
}
