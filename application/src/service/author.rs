use error_stack::Report;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection};
use kernel::interface::query::{
    AuthorQuery, BookQuery, CatalogStatisticsQuery, DependOnAuthorQuery, DependOnBookQuery,
    DependOnCatalogStatisticsQuery,
};
use kernel::prelude::entity::{CatalogKind, SelectLimit};
use kernel::KernelError;

use crate::transfer::{AuthorDetailDto, AuthorDto, GetAllAuthorDto, GetAuthorDto, PageDto};

pub const AUTHOR_PAGE_SIZE: i64 = 10;

#[async_trait::async_trait]
pub trait GetAuthorService:
    'static + Sync + Send + DependOnDatabaseConnection + DependOnAuthorQuery + DependOnBookQuery
{
    #[tracing::instrument(skip_all, fields(id = ?dto.id))]
    async fn get_author(
        &self,
        dto: GetAuthorDto,
    ) -> error_stack::Result<AuthorDetailDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let author = self
            .author_query()
            .find_by_id(&mut connection, &dto.id)
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NotFound)
                    .attach_printable(format!("No author found with id {:?}", dto.id))
            })?;
        let books = self
            .book_query()
            .find_by_author_id(&mut connection, author.id())
            .await?;

        Ok(AuthorDetailDto {
            author: AuthorDto::from(author),
            books: books.into_iter().map(Into::into).collect(),
        })
    }
}

impl<T> GetAuthorService for T where
    T: DependOnDatabaseConnection + DependOnAuthorQuery + DependOnBookQuery
{
}

#[async_trait::async_trait]
pub trait GetAllAuthorService:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection
    + DependOnAuthorQuery
    + DependOnCatalogStatisticsQuery
{
    #[tracing::instrument(skip_all, fields(page = ?dto.page))]
    async fn get_all_authors(
        &self,
        dto: GetAllAuthorDto,
    ) -> error_stack::Result<PageDto<AuthorDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let limit = SelectLimit::new(AUTHOR_PAGE_SIZE);
        let offset = dto.page.offset(&limit);
        let authors = self
            .author_query()
            .find_all(&mut connection, &limit, &offset)
            .await?;
        let total = self
            .catalog_statistics_query()
            .count_all(&mut connection, &CatalogKind::Author)
            .await?;

        Ok(PageDto::new(authors, &dto.page, &limit, total).map(AuthorDto::from))
    }
}

impl<T> GetAllAuthorService for T where
    T: DependOnDatabaseConnection + DependOnAuthorQuery + DependOnCatalogStatisticsQuery
{
}
