use axum::extract::{Query, State};
use axum::routing::get;
use axum::Router;

use application::service::GetLoanService;

use crate::access::{Identity, Librarian};
use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{LoanTransformer, PageRequest};
use crate::response::LoanPresenter;

pub trait LoanRouter {
    fn route_loan(self) -> Self;
}

impl LoanRouter for Router<AppModule> {
    fn route_loan(self) -> Self {
        self.route(
            "/mybooks",
            get(
                |State(module): State<AppModule>,
                 identity: Identity,
                 Query(req): Query<PageRequest>| async move {
                    Controller::new(LoanTransformer, LoanPresenter)
                        .intake((*identity.user_id(), req))
                        .handle(|dto| async move { module.handler().get_borrowed_loans(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/borrowed",
            get(
                |State(module): State<AppModule>,
                 _: Librarian,
                 Query(req): Query<PageRequest>| async move {
                    Controller::new(LoanTransformer, LoanPresenter)
                        .intake(req)
                        .handle(|dto| async move { module.handler().get_all_on_loan(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
