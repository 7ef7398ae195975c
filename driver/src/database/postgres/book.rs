use sqlx::PgConnection;

use kernel::interface::query::BookQuery;
use kernel::prelude::entity::{
    AuthorId, Book, BookId, BookIsbn, BookSummary, BookTitle, GenreId, LanguageId, SelectLimit,
    SelectOffset,
};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresBookRepository;

#[async_trait::async_trait]
impl BookQuery for PostgresBookRepository {
    type Transaction = PostgresTransaction;

    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        PgBookInternal::find_by_id(con, id).await
    }

    async fn find_all(
        &self,
        con: &mut PostgresTransaction,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        PgBookInternal::find_all(con, limit, offset).await
    }

    async fn find_by_author_id(
        &self,
        con: &mut PostgresTransaction,
        author_id: &AuthorId,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        PgBookInternal::find_by_author_id(con, author_id).await
    }
}

#[derive(sqlx::FromRow)]
struct BookRow {
    id: i64,
    title: String,
    author_id: Option<i64>,
    summary: String,
    isbn: String,
    genre_ids: Vec<i64>,
    language_id: Option<i64>,
}

impl From<BookRow> for Book {
    fn from(value: BookRow) -> Self {
        Book::new(
            BookId::new(value.id),
            BookTitle::new(value.title),
            value.author_id.map(AuthorId::new),
            BookSummary::new(value.summary),
            BookIsbn::new(value.isbn),
            value.genre_ids.into_iter().map(GenreId::new).collect(),
            value.language_id.map(LanguageId::new),
        )
    }
}

pub(in crate::database) struct PgBookInternal;

impl PgBookInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &BookId,
    ) -> error_stack::Result<Option<Book>, KernelError> {
        let row = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            SELECT b.id, b.title, b.author_id, b.summary, b.isbn, b.language_id,
                   COALESCE(array_agg(bg.genre_id ORDER BY bg.genre_id)
                            FILTER (WHERE bg.genre_id IS NOT NULL), '{}') AS genre_ids
            FROM books b
            LEFT JOIN book_genres bg ON bg.book_id = b.id
            WHERE b.id = $1
            GROUP BY b.id
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Book::from))
    }

    async fn find_all(
        con: &mut PgConnection,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        let rows = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            SELECT b.id, b.title, b.author_id, b.summary, b.isbn, b.language_id,
                   COALESCE(array_agg(bg.genre_id ORDER BY bg.genre_id)
                            FILTER (WHERE bg.genre_id IS NOT NULL), '{}') AS genre_ids
            FROM books b
            LEFT JOIN book_genres bg ON bg.book_id = b.id
            GROUP BY b.id
            ORDER BY b.title, b.id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit.as_ref())
        .bind(offset.as_ref())
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Book::from).collect())
    }

    async fn find_by_author_id(
        con: &mut PgConnection,
        author_id: &AuthorId,
    ) -> error_stack::Result<Vec<Book>, KernelError> {
        let rows = sqlx::query_as::<_, BookRow>(
            // language=postgresql
            r#"
            SELECT b.id, b.title, b.author_id, b.summary, b.isbn, b.language_id,
                   COALESCE(array_agg(bg.genre_id ORDER BY bg.genre_id)
                            FILTER (WHERE bg.genre_id IS NOT NULL), '{}') AS genre_ids
            FROM books b
            LEFT JOIN book_genres bg ON bg.book_id = b.id
            WHERE b.author_id = $1
            GROUP BY b.id
            ORDER BY b.title, b.id
            "#,
        )
        .bind(author_id.as_ref())
        .fetch_all(con)
        .await
        .convert_error()?;
        Ok(rows.into_iter().map(Book::from).collect())
    }
}
