use axum::extract::State;
use axum::routing::get;
use axum::Router;

use application::service::GetCatalogSummaryService;

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::request::SummaryTransformer;
use crate::response::SummaryPresenter;
use crate::session::VisitorSession;

pub trait CatalogRouter {
    fn route_catalog(self) -> Self;
}

impl CatalogRouter for Router<AppModule> {
    fn route_catalog(self) -> Self {
        self.route(
            "/",
            get(
                |State(module): State<AppModule>, session: VisitorSession| async move {
                    let (session, jar) = session.into_parts();
                    Controller::new(SummaryTransformer, SummaryPresenter)
                        .intake(session)
                        .handle(|dto| async move { module.handler().get_summary(dto).await })
                        .await
                        .map(|res| (jar, res))
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
