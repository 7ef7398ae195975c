use kernel::prelude::entity::{Book, BookId, DestructBook, PageNumber};

use crate::transfer::{AuthorDto, GenreDto, LanguageDto, LoanInstanceDto};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookDto {
    pub id: i64,
    pub title: String,
    pub author_id: Option<i64>,
    pub summary: String,
    pub isbn: String,
    pub genre_ids: Vec<i64>,
    pub language_id: Option<i64>,
}

impl From<Book> for BookDto {
    fn from(value: Book) -> Self {
        let DestructBook {
            id,
            title,
            author_id,
            summary,
            isbn,
            genre_ids,
            language_id,
        } = value.into_destruct();
        Self {
            id: id.into(),
            title: title.into(),
            author_id: author_id.map(Into::into),
            summary: summary.into(),
            isbn: isbn.into(),
            genre_ids: genre_ids.into_iter().map(Into::into).collect(),
            language_id: language_id.map(Into::into),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BookDetailDto {
    pub book: BookDto,
    pub author: Option<AuthorDto>,
    pub genres: Vec<GenreDto>,
    pub language: Option<LanguageDto>,
    pub copies: Vec<LoanInstanceDto>,
}

pub struct GetBookDto {
    pub id: BookId,
}

pub struct GetAllBookDto {
    pub page: PageNumber,
}
