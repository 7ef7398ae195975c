use application::transfer::{GetBorrowedLoansDto, GetOnLoanDto};
use kernel::prelude::entity::UserId;

use crate::controller::Intake;
use crate::request::PageRequest;

pub struct LoanTransformer;

impl Intake<(UserId, PageRequest)> for LoanTransformer {
    type To = GetBorrowedLoansDto;
    fn emit(&self, input: (UserId, PageRequest)) -> Self::To {
        let (borrower, page) = input;
        GetBorrowedLoansDto {
            borrower,
            page: page.page_number(),
        }
    }
}

impl Intake<PageRequest> for LoanTransformer {
    type To = GetOnLoanDto;
    fn emit(&self, input: PageRequest) -> Self::To {
        GetOnLoanDto {
            page: input.page_number(),
        }
    }
}
