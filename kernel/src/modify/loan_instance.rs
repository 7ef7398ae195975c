use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::LoanInstance;
use crate::KernelError;

#[async_trait::async_trait]
pub trait LoanInstanceModifier: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn create(
        &self,
        con: &mut Self::Transaction,
        instance: &LoanInstance,
    ) -> error_stack::Result<(), KernelError>;
    async fn update(
        &self,
        con: &mut Self::Transaction,
        instance: &LoanInstance,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnLoanInstanceModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type LoanInstanceModifier: LoanInstanceModifier<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn loan_instance_modifier(&self) -> &Self::LoanInstanceModifier;
}
