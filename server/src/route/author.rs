use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::Router;

use application::service::{GetAllAuthorService, GetAuthorService};

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::{AuthorTransformer, GetAuthorRequest, PageRequest};
use crate::response::AuthorPresenter;

pub trait AuthorRouter {
    fn route_author(self) -> Self;
}

impl AuthorRouter for Router<AppModule> {
    fn route_author(self) -> Self {
        self.route(
            "/authors",
            get(
                |State(module): State<AppModule>, Query(req): Query<PageRequest>| async move {
                    Controller::new(AuthorTransformer, AuthorPresenter)
                        .intake(req)
                        .handle(|dto| async move { module.handler().get_all_authors(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/author/:id",
            get(
                |State(module): State<AppModule>, Path(id): Path<i64>| async move {
                    Controller::new(AuthorTransformer, AuthorPresenter)
                        .intake(GetAuthorRequest::new(id))
                        .handle(|dto| async move { module.handler().get_author(dto).await })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
