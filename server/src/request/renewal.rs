use serde::Deserialize;
use time::Date;
use uuid::Uuid;

use application::transfer::RenewLoanDto;
use kernel::prelude::entity::LoanInstanceId;

use crate::controller::Intake;

#[derive(Debug)]
pub struct RenewalFormRequest {
    id: Uuid,
}

impl RenewalFormRequest {
    pub fn new(id: Uuid) -> Self {
        Self { id }
    }
}

/// Body of `POST /book/:id/renew`, with the date as `YYYY-MM-DD`.
#[derive(Debug, Deserialize)]
pub struct RenewLoanRequest {
    renewal_date: Date,
}

pub struct RenewalTransformer;

impl Intake<RenewalFormRequest> for RenewalTransformer {
    type To = RenewLoanDto;
    fn emit(&self, input: RenewalFormRequest) -> Self::To {
        RenewLoanDto {
            id: LoanInstanceId::new(input.id),
            renewal_date: None,
        }
    }
}

impl Intake<(Uuid, RenewLoanRequest)> for RenewalTransformer {
    type To = RenewLoanDto;
    fn emit(&self, input: (Uuid, RenewLoanRequest)) -> Self::To {
        let (id, input) = input;
        RenewLoanDto {
            id: LoanInstanceId::new(id),
            renewal_date: Some(input.renewal_date),
        }
    }
}

#[cfg(test)]
mod test {
    use time::macros::date;
    use uuid::Uuid;

    use super::{RenewLoanRequest, RenewalFormRequest, RenewalTransformer};
    use crate::controller::Intake;

    #[test]
    fn form_request_carries_no_date() {
        let id = Uuid::new_v4();
        let dto = RenewalTransformer.emit(RenewalFormRequest::new(id));
        assert_eq!(dto.id.as_ref(), &id);
        assert_eq!(dto.renewal_date, None);
    }

    #[test]
    fn submitted_date_is_parsed_from_json() {
        let id = Uuid::new_v4();
        let req: RenewLoanRequest =
            serde_json::from_str(r#"{"renewal_date":"2024-01-15"}"#).unwrap();
        let dto = RenewalTransformer.emit((id, req));
        assert_eq!(dto.renewal_date, Some(date!(2024 - 01 - 15)));
    }
}
