use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use uuid::Uuid;

use application::service::RenewLoanService;

use crate::access::Librarian;
use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{RenewLoanRequest, RenewalFormRequest, RenewalTransformer};
use crate::response::RenewalPresenter;

pub trait RenewalRouter {
    fn route_renewal(self) -> Self;
}

impl RenewalRouter for Router<AppModule> {
    fn route_renewal(self) -> Self {
        self.route(
            "/book/:id/renew",
            get(
                |State(module): State<AppModule>, _: Librarian, Path(id): Path<Uuid>| async move {
                    Controller::new(RenewalTransformer, RenewalPresenter)
                        .intake(RenewalFormRequest::new(id))
                        .handle(|dto| async move { module.handler().renew_loan(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            )
            .post(
                |State(module): State<AppModule>,
                 librarian: Librarian,
                 Path(id): Path<Uuid>,
                 Json(req): Json<RenewLoanRequest>| async move {
                    tracing::debug!(staff = ?librarian.identity().user_id(), "renewal submitted");
                    Controller::new(RenewalTransformer, RenewalPresenter)
                        .intake((id, req))
                        .handle(|dto| async move { module.handler().renew_loan(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
