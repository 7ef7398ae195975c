use time::Date;
use uuid::Uuid;

use kernel::prelude::entity::{DestructLoanInstance, LoanInstance, LoanStatus, PageNumber, UserId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanInstanceDto {
    pub id: Uuid,
    pub book_id: i64,
    pub imprint: String,
    pub due_back: Option<Date>,
    pub status: LoanStatus,
    pub borrower: Option<Uuid>,
}

impl From<LoanInstance> for LoanInstanceDto {
    fn from(value: LoanInstance) -> Self {
        let DestructLoanInstance {
            id,
            book_id,
            imprint,
            due_back,
            status,
            borrower,
        } = value.into_destruct();
        Self {
            id: id.into(),
            book_id: book_id.into(),
            imprint: imprint.into(),
            due_back: due_back.map(Into::into),
            status,
            borrower: borrower.map(Into::into),
        }
    }
}

pub struct GetBorrowedLoansDto {
    pub borrower: UserId,
    pub page: PageNumber,
}

pub struct GetOnLoanDto {
    pub page: PageNumber,
}
