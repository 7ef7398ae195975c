use application::transfer::{GetAllAuthorDto, GetAuthorDto};
use kernel::prelude::entity::AuthorId;

use crate::controller::Intake;
use crate::request::PageRequest;

#[derive(Debug)]
pub struct GetAuthorRequest {
    id: i64,
}

impl GetAuthorRequest {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

pub struct AuthorTransformer;

impl Intake<GetAuthorRequest> for AuthorTransformer {
    type To = GetAuthorDto;
    fn emit(&self, input: GetAuthorRequest) -> Self::To {
        GetAuthorDto {
            id: AuthorId::new(input.id),
        }
    }
}

impl Intake<PageRequest> for AuthorTransformer {
    type To = GetAllAuthorDto;
    fn emit(&self, input: PageRequest) -> Self::To {
        GetAllAuthorDto {
            page: input.page_number(),
        }
    }
}
