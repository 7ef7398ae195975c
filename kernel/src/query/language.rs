use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Language, LanguageId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait LanguageQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn find_by_id(
        &self,
        con: &mut Self::Transaction,
        id: &LanguageId,
    ) -> error_stack::Result<Option<Language>, KernelError>;
}

pub trait DependOnLanguageQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type LanguageQuery: LanguageQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn language_query(&self) -> &Self::LanguageQuery;
}
