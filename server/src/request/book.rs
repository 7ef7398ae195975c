use application::transfer::{GetAllBookDto, GetBookDto};
use kernel::prelude::entity::BookId;

use crate::controller::Intake;
use crate::request::PageRequest;

#[derive(Debug)]
pub struct GetBookRequest {
    id: i64,
}

impl GetBookRequest {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

pub struct BookTransformer;

impl Intake<GetBookRequest> for BookTransformer {
    type To = GetBookDto;
    fn emit(&self, input: GetBookRequest) -> Self::To {
        GetBookDto {
            id: BookId::new(input.id),
        }
    }
}

impl Intake<PageRequest> for BookTransformer {
    type To = GetAllBookDto;
    fn emit(&self, input: PageRequest) -> Self::To {
        GetAllBookDto {
            page: input.page_number(),
        }
    }
}
