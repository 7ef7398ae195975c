use std::process::{ExitCode, Termination};

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use error_stack::Report;

use kernel::prelude::entity::{LoanInstanceId, RenewalRejection};
use kernel::KernelError;

use crate::access::AccessDenied;
use crate::response::RenewalRejectedResponse;

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        self.0.report()
    }
}

#[derive(Debug)]
pub enum ErrorStatus {
    Kernel(Report<KernelError>),
    Access(AccessDenied),
}

impl From<Report<KernelError>> for ErrorStatus {
    fn from(e: Report<KernelError>) -> Self {
        ErrorStatus::Kernel(e)
    }
}

impl From<AccessDenied> for ErrorStatus {
    fn from(e: AccessDenied) -> Self {
        ErrorStatus::Access(e)
    }
}

impl IntoResponse for ErrorStatus {
    fn into_response(self) -> Response {
        let report = match self {
            ErrorStatus::Access(denied) => return denied.into_response(),
            ErrorStatus::Kernel(report) => report,
        };
        match report.current_context() {
            KernelError::NotFound => StatusCode::NOT_FOUND.into_response(),
            KernelError::Validation => match (
                report.downcast_ref::<LoanInstanceId>(),
                report.downcast_ref::<RenewalRejection>(),
            ) {
                (Some(id), Some(rejection)) => {
                    RenewalRejectedResponse::new(id, rejection).into_response()
                }
                _ => StatusCode::UNPROCESSABLE_ENTITY.into_response(),
            },
            KernelError::Timeout => StatusCode::REQUEST_TIMEOUT.into_response(),
            KernelError::Internal => {
                tracing::error!("{report:?}");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
