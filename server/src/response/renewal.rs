use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use serde::Serialize;
use time::Date;
use uuid::Uuid;

use application::transfer::RenewalDto;
use kernel::prelude::entity::{LoanInstanceId, RenewalRejection};

use crate::controller::Exhaust;

/// Where staff land after a successful renewal.
pub const RENEWAL_SUCCESS_LOCATION: &str = "/borrowed";

#[derive(Debug, Serialize)]
pub struct RenewalFormResponse {
    id: Uuid,
    renewal_date: Date,
}

/// The form echoed back with the submitted date and the reason it was refused.
#[derive(Debug, Serialize)]
pub struct RenewalRejectedResponse {
    id: Uuid,
    renewal_date: Date,
    error: String,
}

impl RenewalRejectedResponse {
    pub fn new(id: &LoanInstanceId, rejection: &RenewalRejection) -> Self {
        Self {
            id: *id.as_ref(),
            renewal_date: rejection.candidate(),
            error: rejection.to_string(),
        }
    }
}

impl IntoResponse for RenewalRejectedResponse {
    fn into_response(self) -> Response {
        (StatusCode::UNPROCESSABLE_ENTITY, Json(self)).into_response()
    }
}

#[derive(Debug)]
pub enum RenewalResponse {
    Form(RenewalFormResponse),
    Renewed,
}

impl IntoResponse for RenewalResponse {
    fn into_response(self) -> Response {
        match self {
            RenewalResponse::Form(form) => Json(form).into_response(),
            RenewalResponse::Renewed => Redirect::to(RENEWAL_SUCCESS_LOCATION).into_response(),
        }
    }
}

pub struct RenewalPresenter;

impl Exhaust<RenewalDto> for RenewalPresenter {
    type To = RenewalResponse;
    fn emit(&self, output: RenewalDto) -> Self::To {
        match output {
            RenewalDto::Proposed { id, renewal_date } => {
                RenewalResponse::Form(RenewalFormResponse { id, renewal_date })
            }
            RenewalDto::Applied(_) => RenewalResponse::Renewed,
        }
    }
}
