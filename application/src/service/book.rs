use error_stack::Report;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection};
use kernel::interface::query::{
    AuthorQuery, BookQuery, CatalogStatisticsQuery, DependOnAuthorQuery, DependOnBookQuery,
    DependOnCatalogStatisticsQuery, DependOnGenreQuery, DependOnLanguageQuery,
    DependOnLoanInstanceQuery, GenreQuery, LanguageQuery, LoanInstanceQuery,
};
use kernel::prelude::entity::{CatalogKind, SelectLimit};
use kernel::KernelError;

use crate::transfer::{BookDetailDto, BookDto, GetAllBookDto, GetBookDto, PageDto};

pub const BOOK_PAGE_SIZE: i64 = 4;

#[async_trait::async_trait]
pub trait GetBookService:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection
    + DependOnBookQuery
    + DependOnAuthorQuery
    + DependOnGenreQuery
    + DependOnLanguageQuery
    + DependOnLoanInstanceQuery
{
    #[tracing::instrument(skip_all, fields(id = ?dto.id))]
    async fn get_book(&self, dto: GetBookDto) -> error_stack::Result<BookDetailDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let book = self
            .book_query()
            .find_by_id(&mut connection, &dto.id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("No book found with id {:?}", dto.id))
            })?;

        let author = match book.author_id() {
            Some(author_id) => {
                self.author_query()
                    .find_by_id(&mut connection, author_id)
                    .await?
            }
            None => None,
        };
        let language = match book.language_id() {
            Some(language_id) => {
                self.language_query()
                    .find_by_id(&mut connection, language_id)
                    .await?
            }
            None => None,
        };
        let genres = self
            .genre_query()
            .find_by_book_id(&mut connection, book.id())
            .await?;
        let copies = self
            .loan_instance_query()
            .find_by_book_id(&mut connection, book.id())
            .await?;

        Ok(BookDetailDto {
            book: BookDto::from(book),
            author: author.map(Into::into),
            genres: genres.into_iter().map(Into::into).collect(),
            language: language.map(Into::into),
            copies: copies.into_iter().map(Into::into).collect(),
        })
    }
}

impl<T> GetBookService for T where
    T: DependOnDatabaseConnection
        + DependOnBookQuery
        + DependOnAuthorQuery
        + DependOnGenreQuery
        + DependOnLanguageQuery
        + DependOnLoanInstanceQuery
{
}

#[async_trait::async_trait]
pub trait GetAllBookService:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection
    + DependOnBookQuery
    + DependOnCatalogStatisticsQuery
{
    #[tracing::instrument(skip_all, fields(page = ?dto.page))]
    async fn get_all_books(
        &self,
        dto: GetAllBookDto,
    ) -> error_stack::Result<PageDto<BookDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let limit = SelectLimit::new(BOOK_PAGE_SIZE);
        let offset = dto.page.offset(&limit);
        let books = self
            .book_query()
            .find_all(&mut connection, &limit, &offset)
            .await?;
        let total = self
            .catalog_statistics_query()
            .count_all(&mut connection, &CatalogKind::Book)
            .await?;

        Ok(PageDto::new(books, &dto.page, &limit, total).map(BookDto::from))
    }
}

impl<T> GetAllBookService for T where
    T: DependOnDatabaseConnection + DependOnBookQuery + DependOnCatalogStatisticsQuery
{
}
