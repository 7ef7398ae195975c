use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use application::transfer::CatalogSummaryDto;

use crate::controller::Exhaust;

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    num_books: i64,
    num_instances: i64,
    num_instances_available: i64,
    num_authors: i64,
    num_genres: i64,
    books_containing_the: i64,
    num_visits: i64,
}

impl IntoResponse for SummaryResponse {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

pub struct SummaryPresenter;

impl Exhaust<CatalogSummaryDto> for SummaryPresenter {
    type To = SummaryResponse;
    fn emit(&self, output: CatalogSummaryDto) -> Self::To {
        SummaryResponse {
            num_books: output.num_books,
            num_instances: output.num_instances,
            num_instances_available: output.num_instances_available,
            num_authors: output.num_authors,
            num_genres: output.num_genres,
            books_containing_the: output.books_containing_the,
            num_visits: output.num_visits,
        }
    }
}
