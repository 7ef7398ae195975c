use sqlx::PgConnection;

use kernel::interface::query::CatalogStatisticsQuery;
use kernel::prelude::entity::{CatalogKind, LoanStatus};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresCatalogStatisticsRepository;

#[async_trait::async_trait]
impl CatalogStatisticsQuery for PostgresCatalogStatisticsRepository {
    type Transaction = PostgresTransaction;

    async fn count_all(
        &self,
        con: &mut PostgresTransaction,
        kind: &CatalogKind,
    ) -> error_stack::Result<i64, KernelError> {
        PgCatalogStatisticsInternal::count_all(con, kind).await
    }

    async fn count_by_status(
        &self,
        con: &mut PostgresTransaction,
        status: &LoanStatus,
    ) -> error_stack::Result<i64, KernelError> {
        PgCatalogStatisticsInternal::count_by_status(con, status).await
    }

    async fn count_books_with_title_containing(
        &self,
        con: &mut PostgresTransaction,
        fragment: &str,
    ) -> error_stack::Result<i64, KernelError> {
        PgCatalogStatisticsInternal::count_books_with_title_containing(con, fragment).await
    }
}

pub(in crate::database) struct PgCatalogStatisticsInternal;

impl PgCatalogStatisticsInternal {
    async fn count_all(
        con: &mut PgConnection,
        kind: &CatalogKind,
    ) -> error_stack::Result<i64, KernelError> {
        // Table names are fixed per kind, never taken from input.
        let sql = match kind {
            CatalogKind::Book => "SELECT COUNT(*) FROM books",
            CatalogKind::Author => "SELECT COUNT(*) FROM authors",
            CatalogKind::Genre => "SELECT COUNT(*) FROM genres",
            CatalogKind::LoanInstance => "SELECT COUNT(*) FROM loan_instances",
        };
        sqlx::query_scalar::<_, i64>(sql)
            .fetch_one(con)
            .await
            .convert_error()
    }

    async fn count_by_status(
        con: &mut PgConnection,
        status: &LoanStatus,
    ) -> error_stack::Result<i64, KernelError> {
        // language=postgresql
        sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM loan_instances
            WHERE status = $1
            "#,
        )
        .bind(status.code())
        .fetch_one(con)
        .await
        .convert_error()
    }

    async fn count_books_with_title_containing(
        con: &mut PgConnection,
        fragment: &str,
    ) -> error_stack::Result<i64, KernelError> {
        // language=postgresql
        sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM books
            WHERE strpos(title, $1) > 0
            "#,
        )
        .bind(fragment)
        .fetch_one(con)
        .await
        .convert_error()
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::database::DatabaseConnection;
    use kernel::interface::query::CatalogStatisticsQuery;
    use kernel::prelude::entity::CatalogKind;
    use kernel::KernelError;

    use crate::database::postgres::fixture;
    use crate::database::postgres::{PostgresCatalogStatisticsRepository, PostgresDatabase};

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn title_match_is_case_sensitive() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        let mut con = db.transact().await?;

        let repository = PostgresCatalogStatisticsRepository;
        let books_before = repository.count_all(&mut con, &CatalogKind::Book).await?;
        let the_before = repository
            .count_books_with_title_containing(&mut con, "the")
            .await?;

        fixture::insert_book(&mut con, "The Hobbit", None, None).await?;
        fixture::insert_book(&mut con, "Brave New World", None, None).await?;
        fixture::insert_book(&mut con, "Gather the Stars", None, None).await?;

        let books_after = repository.count_all(&mut con, &CatalogKind::Book).await?;
        let the_after = repository
            .count_books_with_title_containing(&mut con, "the")
            .await?;
        assert_eq!(books_after - books_before, 3);
        assert_eq!(the_after - the_before, 1);
        Ok(())
    }
}
