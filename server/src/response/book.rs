use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use application::transfer::{BookDetailDto, BookDto, GenreDto, LanguageDto, PageDto};

use crate::controller::Exhaust;
use crate::response::{AuthorResponse, LoanInstanceResponse, PageResponse};

#[derive(Debug, Serialize)]
pub struct BookResponse {
    id: i64,
    title: String,
    author_id: Option<i64>,
    summary: String,
    isbn: String,
    genre_ids: Vec<i64>,
    language_id: Option<i64>,
}

impl From<BookDto> for BookResponse {
    fn from(value: BookDto) -> Self {
        Self {
            id: value.id,
            title: value.title,
            author_id: value.author_id,
            summary: value.summary,
            isbn: value.isbn,
            genre_ids: value.genre_ids,
            language_id: value.language_id,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GenreResponse {
    id: i64,
    name: String,
}

impl From<GenreDto> for GenreResponse {
    fn from(value: GenreDto) -> Self {
        Self {
            id: value.id,
            name: value.name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LanguageResponse {
    id: i64,
    name: String,
}

impl From<LanguageDto> for LanguageResponse {
    fn from(value: LanguageDto) -> Self {
        Self {
            id: value.id,
            name: value.name,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BookDetailResponse {
    #[serde(flatten)]
    book: BookResponse,
    author: Option<AuthorResponse>,
    genres: Vec<GenreResponse>,
    language: Option<LanguageResponse>,
    copies: Vec<LoanInstanceResponse>,
}

impl IntoResponse for BookDetailResponse {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

pub struct BookPresenter;

impl Exhaust<BookDetailDto> for BookPresenter {
    type To = BookDetailResponse;
    fn emit(&self, output: BookDetailDto) -> Self::To {
        BookDetailResponse {
            book: output.book.into(),
            author: output.author.map(Into::into),
            genres: output.genres.into_iter().map(Into::into).collect(),
            language: output.language.map(Into::into),
            copies: output.copies.into_iter().map(Into::into).collect(),
        }
    }
}

impl Exhaust<PageDto<BookDto>> for BookPresenter {
    type To = PageResponse<BookResponse>;
    fn emit(&self, output: PageDto<BookDto>) -> Self::To {
        PageResponse::from_dto(output, BookResponse::from)
    }
}
