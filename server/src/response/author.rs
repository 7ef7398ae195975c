use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use time::Date;

use application::transfer::{AuthorDetailDto, AuthorDto, PageDto};

use crate::controller::Exhaust;
use crate::response::{BookResponse, PageResponse};

#[derive(Debug, Serialize)]
pub struct AuthorResponse {
    id: i64,
    first_name: String,
    last_name: String,
    date_of_birth: Option<Date>,
    date_of_death: Option<Date>,
}

impl From<AuthorDto> for AuthorResponse {
    fn from(value: AuthorDto) -> Self {
        Self {
            id: value.id,
            first_name: value.first_name,
            last_name: value.last_name,
            date_of_birth: value.date_of_birth,
            date_of_death: value.date_of_death,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AuthorDetailResponse {
    #[serde(flatten)]
    author: AuthorResponse,
    books: Vec<BookResponse>,
}

impl IntoResponse for AuthorDetailResponse {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

pub struct AuthorPresenter;

impl Exhaust<AuthorDetailDto> for AuthorPresenter {
    type To = AuthorDetailResponse;
    fn emit(&self, output: AuthorDetailDto) -> Self::To {
        AuthorDetailResponse {
            author: output.author.into(),
            books: output.books.into_iter().map(Into::into).collect(),
        }
    }
}

impl Exhaust<PageDto<AuthorDto>> for AuthorPresenter {
    type To = PageResponse<AuthorResponse>;
    fn emit(&self, output: PageDto<AuthorDto>) -> Self::To {
        PageResponse::from_dto(output, AuthorResponse::from)
    }
}
