use kernel::prelude::entity::SessionId;

pub struct GetCatalogSummaryDto {
    pub session: SessionId,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSummaryDto {
    pub num_books: i64,
    pub num_instances: i64,
    pub num_instances_available: i64,
    pub num_authors: i64,
    pub num_genres: i64,
    pub books_containing_the: i64,
    pub num_visits: i64,
}
