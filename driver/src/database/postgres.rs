use std::ops::{Deref, DerefMut};

use error_stack::{Report, ResultExt};
use sqlx::{Error, PgConnection, Pool, Postgres};

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::KernelError;

use crate::env;
use crate::error::ConvertError;

pub use self::{
    author::*, book::*, genre::*, language::*, loan_instance::*, statistics::*,
};

mod author;
mod book;
mod genre;
mod language;
mod loan_instance;
mod statistics;

static POSTGRES_URL: &str = "POSTGRES_URL";

#[derive(Clone)]
pub struct PostgresDatabase {
    pool: Pool<Postgres>,
}

impl PostgresDatabase {
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        let url = env(POSTGRES_URL)?;
        let pool = Pool::connect(&url).await.convert_error()?;
        Ok(Self { pool })
    }

    /// Applies the embedded schema migrations.
    pub async fn migrate(&self) -> error_stack::Result<(), KernelError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .change_context_lazy(|| KernelError::Internal)
            .attach_printable_lazy(|| "Failed to apply database migrations")
    }
}

#[async_trait::async_trait]
impl DatabaseConnection for PostgresDatabase {
    type Transaction = PostgresTransaction;
    async fn transact(&self) -> error_stack::Result<Self::Transaction, KernelError> {
        let con = self.pool.begin().await.convert_error()?;
        Ok(PostgresTransaction(con))
    }
}

pub struct PostgresTransaction(sqlx::Transaction<'static, Postgres>);

#[async_trait::async_trait]
impl Transaction for PostgresTransaction {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        self.0.commit().await.convert_error()
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        self.0.rollback().await.convert_error()
    }
}

impl Deref for PostgresTransaction {
    type Target = PgConnection;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for PostgresTransaction {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<T> ConvertError for Result<T, Error> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| match error {
            Error::PoolTimedOut => Report::from(error).change_context(KernelError::Timeout),
            _ => Report::from(error).change_context(KernelError::Internal),
        })
    }
}

#[cfg(test)]
pub(in crate::database) mod fixture {
    use sqlx::PgConnection;

    use kernel::prelude::entity::{AuthorId, BookId, GenreId, LanguageId};

    use crate::error::ConvertError;
    use kernel::KernelError;

    pub async fn insert_author(
        con: &mut PgConnection,
        first_name: &str,
        last_name: &str,
    ) -> error_stack::Result<AuthorId, KernelError> {
        // language=postgresql
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO authors (first_name, last_name)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(first_name)
        .bind(last_name)
        .fetch_one(con)
        .await
        .convert_error()?;
        Ok(AuthorId::new(id))
    }

    pub async fn insert_language(
        con: &mut PgConnection,
        name: &str,
    ) -> error_stack::Result<LanguageId, KernelError> {
        // language=postgresql
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO languages (name)
            VALUES ($1)
            RETURNING id
            "#,
        )
        .bind(name)
        .fetch_one(con)
        .await
        .convert_error()?;
        Ok(LanguageId::new(id))
    }

    pub async fn insert_genre(
        con: &mut PgConnection,
        name: &str,
    ) -> error_stack::Result<GenreId, KernelError> {
        // language=postgresql
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO genres (name)
            VALUES ($1)
            RETURNING id
            "#,
        )
        .bind(name)
        .fetch_one(con)
        .await
        .convert_error()?;
        Ok(GenreId::new(id))
    }

    pub async fn insert_book(
        con: &mut PgConnection,
        title: &str,
        author_id: Option<&AuthorId>,
        language_id: Option<&LanguageId>,
    ) -> error_stack::Result<BookId, KernelError> {
        let isbn: String = uuid::Uuid::new_v4().simple().to_string().chars().take(13).collect();
        // language=postgresql
        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO books (title, author_id, summary, isbn, language_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(title)
        .bind(author_id.map(|id| *id.as_ref()))
        .bind(format!("Summary of {title}"))
        .bind(isbn)
        .bind(language_id.map(|id| *id.as_ref()))
        .fetch_one(con)
        .await
        .convert_error()?;
        Ok(BookId::new(id))
    }

    pub async fn link_genre(
        con: &mut PgConnection,
        book_id: &BookId,
        genre_id: &GenreId,
    ) -> error_stack::Result<(), KernelError> {
        // language=postgresql
        sqlx::query(
            r#"
            INSERT INTO book_genres (book_id, genre_id)
            VALUES ($1, $2)
            "#,
        )
        .bind(book_id.as_ref())
        .bind(genre_id.as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}
