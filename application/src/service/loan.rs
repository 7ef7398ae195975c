use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection};
use kernel::interface::query::{DependOnLoanInstanceQuery, LoanInstanceQuery};
use kernel::prelude::entity::{LoanStatus, PageNumber, SelectLimit, UserId};
use kernel::KernelError;

use crate::transfer::{GetBorrowedLoansDto, GetOnLoanDto, LoanInstanceDto, PageDto};

pub const LOAN_PAGE_SIZE: i64 = 10;

#[async_trait::async_trait]
pub trait GetLoanService:
    'static + Sync + Send + DependOnDatabaseConnection + DependOnLoanInstanceQuery
{
    /// Copies currently on loan to one borrower, soonest due first.
    #[tracing::instrument(skip_all, fields(borrower = ?dto.borrower, page = ?dto.page))]
    async fn get_borrowed_loans(
        &self,
        dto: GetBorrowedLoansDto,
    ) -> error_stack::Result<PageDto<LoanInstanceDto>, KernelError> {
        self.get_on_loan_page(Some(&dto.borrower), &dto.page).await
    }

    /// Every copy currently on loan, soonest due first.
    #[tracing::instrument(skip_all, fields(page = ?dto.page))]
    async fn get_all_on_loan(
        &self,
        dto: GetOnLoanDto,
    ) -> error_stack::Result<PageDto<LoanInstanceDto>, KernelError> {
        self.get_on_loan_page(None, &dto.page).await
    }

    async fn get_on_loan_page(
        &self,
        borrower: Option<&UserId>,
        page: &PageNumber,
    ) -> error_stack::Result<PageDto<LoanInstanceDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let limit = SelectLimit::new(LOAN_PAGE_SIZE);
        let offset = page.offset(&limit);
        let query = self.loan_instance_query();
        let instances = query
            .find_by_status(&mut connection, &LoanStatus::OnLoan, borrower, &limit, &offset)
            .await?;
        let total = query
            .count_by_status(&mut connection, &LoanStatus::OnLoan, borrower)
            .await?;

        Ok(PageDto::new(instances, page, &limit, total).map(LoanInstanceDto::from))
    }
}

impl<T> GetLoanService for T where T: DependOnDatabaseConnection + DependOnLoanInstanceQuery {}
