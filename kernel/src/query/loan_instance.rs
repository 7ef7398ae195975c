use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{
    BookId, LoanInstance, LoanInstanceId, LoanStatus, SelectLimit, SelectOffset, UserId,
};
use crate::KernelError;

#[async_trait::async_trait]
pub trait LoanInstanceQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn find_by_id(
        &self,
        con: &mut Self::Transaction,
        id: &LoanInstanceId,
    ) -> error_stack::Result<Option<LoanInstance>, KernelError>;

    async fn find_by_book_id(
        &self,
        con: &mut Self::Transaction,
        book_id: &BookId,
    ) -> error_stack::Result<Vec<LoanInstance>, KernelError>;

    /// Instances in `status`, optionally restricted to one borrower, ordered by due date.
    async fn find_by_status(
        &self,
        con: &mut Self::Transaction,
        status: &LoanStatus,
        borrower: Option<&UserId>,
        limit: &SelectLimit,
        offset: &SelectOffset,
    ) -> error_stack::Result<Vec<LoanInstance>, KernelError>;

    async fn count_by_status(
        &self,
        con: &mut Self::Transaction,
        status: &LoanStatus,
        borrower: Option<&UserId>,
    ) -> error_stack::Result<i64, KernelError>;
}

pub trait DependOnLoanInstanceQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type LoanInstanceQuery: LoanInstanceQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn loan_instance_query(&self) -> &Self::LoanInstanceQuery;
}
