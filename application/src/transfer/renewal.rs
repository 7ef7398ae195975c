use time::Date;
use uuid::Uuid;

use kernel::prelude::entity::LoanInstanceId;

use crate::transfer::LoanInstanceDto;

pub struct RenewLoanDto {
    pub id: LoanInstanceId,
    /// `None` asks for the default form state instead of applying a date.
    pub renewal_date: Option<Date>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenewalDto {
    Proposed { id: Uuid, renewal_date: Date },
    Applied(LoanInstanceDto),
}
