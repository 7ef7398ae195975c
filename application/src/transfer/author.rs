use time::Date;

use kernel::prelude::entity::{Author, AuthorId, DestructAuthor, PageNumber};

use crate::transfer::BookDto;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorDto {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<Date>,
    pub date_of_death: Option<Date>,
}

impl From<Author> for AuthorDto {
    fn from(value: Author) -> Self {
        let DestructAuthor {
            id,
            first_name,
            last_name,
            date_of_birth,
            date_of_death,
        } = value.into_destruct();
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            date_of_birth: date_of_birth.map(Into::into),
            date_of_death: date_of_death.map(Into::into),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AuthorDetailDto {
    pub author: AuthorDto,
    pub books: Vec<BookDto>,
}

pub struct GetAuthorDto {
    pub id: AuthorId,
}

pub struct GetAllAuthorDto {
    pub page: PageNumber,
}
