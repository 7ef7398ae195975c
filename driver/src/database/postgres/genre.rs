use sqlx::PgConnection;

use kernel::interface::query::GenreQuery;
use kernel::prelude::entity::{BookId, Genre, GenreId, GenreName};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresGenreRepository;

#[async_trait::async_trait]
impl GenreQuery for PostgresGenreRepository {
    type Transaction = PostgresTransaction;

    async fn find_by_book_id(
        &self,
        con: &mut PostgresTransaction,
        book_id: &BookId,
    ) -> error_stack::Result<Vec<Genre>, KernelError> {
        PgGenreInternal::find_by_book_id(con, book_id).await
    }
}

#[derive(sqlx::FromRow)]
struct GenreRow {
    id: i64,
    name: String,
}

impl From<GenreRow> for Genre {
    fn from(value: GenreRow) -> Self {
        Genre::new(GenreId::new(value.id), GenreName::new(value.name))
    }
}

pub(in crate::database) struct PgGenreInternal;

impl PgGenreInternal {
    async fn find_by_book_id(
        con: &mut PgConnection,
        book_id: &BookId,
    ) -> error_stack::Result<Vec<Genre>, KernelError> {
        let rows = sqlx::query_as::<_, GenreRow>(
            // language=postgresql
            r#"
            SELECT g.id, g.name
            FROM genres g
            INNER JOIN book_genres bg ON bg.genre_id = g.id
            WHERE bg.book_id = $1
            ORDER BY g.name
            "#,
        )
        .bind(book_id.as_ref())
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Genre::from).collect())
    }
}

#[cfg(test)]
mod test {
    use uuid::Uuid;

    use kernel::interface::database::DatabaseConnection;
    use kernel::interface::query::GenreQuery;
    use kernel::KernelError;

    use crate::database::postgres::fixture;
    use crate::database::postgres::{PostgresDatabase, PostgresGenreRepository};

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn find_by_book_id_skips_unlinked() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        let mut con = db.transact().await?;
        let suffix = Uuid::new_v4();

        let horror = fixture::insert_genre(&mut con, &format!("Horror {suffix}")).await?;
        let gothic = fixture::insert_genre(&mut con, &format!("Gothic {suffix}")).await?;
        fixture::insert_genre(&mut con, &format!("Poetry {suffix}")).await?;
        let book = fixture::insert_book(&mut con, "Dracula", None, None).await?;
        fixture::link_genre(&mut con, &book, &horror).await?;
        fixture::link_genre(&mut con, &book, &gothic).await?;

        let genres = PostgresGenreRepository
            .find_by_book_id(&mut con, &book)
            .await?;
        let ids = genres.iter().map(|genre| *genre.id()).collect::<Vec<_>>();
        assert_eq!(ids, vec![gothic, horror]);
        Ok(())
    }
}
