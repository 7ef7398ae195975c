use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{CatalogKind, LoanStatus};
use crate::KernelError;

#[async_trait::async_trait]
pub trait CatalogStatisticsQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn count_all(
        &self,
        con: &mut Self::Transaction,
        kind: &CatalogKind,
    ) -> error_stack::Result<i64, KernelError>;

    async fn count_by_status(
        &self,
        con: &mut Self::Transaction,
        status: &LoanStatus,
    ) -> error_stack::Result<i64, KernelError>;

    /// Case-sensitive substring match on the title.
    async fn count_books_with_title_containing(
        &self,
        con: &mut Self::Transaction,
        fragment: &str,
    ) -> error_stack::Result<i64, KernelError>;
}

pub trait DependOnCatalogStatisticsQuery:
    'static + Sync + Send + DependOnDatabaseConnection
{
    type CatalogStatisticsQuery: CatalogStatisticsQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn catalog_statistics_query(&self) -> &Self::CatalogStatisticsQuery;
}
