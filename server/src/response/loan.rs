use serde::Serialize;
use time::Date;
use uuid::Uuid;

use application::transfer::{LoanInstanceDto, PageDto};
use kernel::prelude::entity::LoanStatus;

use crate::controller::Exhaust;
use crate::response::PageResponse;

#[derive(Debug, Serialize)]
pub struct LoanInstanceResponse {
    id: Uuid,
    book_id: i64,
    imprint: String,
    due_back: Option<Date>,
    status: LoanStatus,
    status_label: String,
    borrower: Option<Uuid>,
}

impl From<LoanInstanceDto> for LoanInstanceResponse {
    fn from(value: LoanInstanceDto) -> Self {
        Self {
            id: value.id,
            book_id: value.book_id,
            imprint: value.imprint,
            due_back: value.due_back,
            status_label: value.status.to_string(),
            status: value.status,
            borrower: value.borrower,
        }
    }
}

pub struct LoanPresenter;

impl Exhaust<PageDto<LoanInstanceDto>> for LoanPresenter {
    type To = PageResponse<LoanInstanceResponse>;
    fn emit(&self, output: PageDto<LoanInstanceDto>) -> Self::To {
        PageResponse::from_dto(output, LoanInstanceResponse::from)
    }
}
