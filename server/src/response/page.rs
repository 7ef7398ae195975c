use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use application::transfer::PageDto;

#[derive(Debug, Serialize)]
pub struct PageResponse<T> {
    items: Vec<T>,
    page: i64,
    page_size: i64,
    total: i64,
    num_pages: i64,
    is_paginated: bool,
}

impl<T> PageResponse<T> {
    pub fn from_dto<U>(dto: PageDto<U>, f: impl FnMut(U) -> T) -> Self {
        let num_pages = dto.num_pages();
        let is_paginated = dto.is_paginated();
        let dto = dto.map(f);
        Self {
            items: dto.items,
            page: dto.page,
            page_size: dto.page_size,
            total: dto.total,
            num_pages,
            is_paginated,
        }
    }
}

impl<T: Serialize> IntoResponse for PageResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
