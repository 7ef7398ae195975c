mod id;
mod isbn;
mod summary;
mod title;

pub use self::{id::*, isbn::*, summary::*, title::*};
use crate::entity::{AuthorId, GenreId, LanguageId};
use destructure::Destructure;
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Book {
    id: BookId,
    title: BookTitle,
    author_id: Option<AuthorId>,
    summary: BookSummary,
    isbn: BookIsbn,
    genre_ids: Vec<GenreId>,
    language_id: Option<LanguageId>,
}

impl Book {
    pub fn new(
        id: BookId,
        title: BookTitle,
        author_id: Option<AuthorId>,
        summary: BookSummary,
        isbn: BookIsbn,
        genre_ids: Vec<GenreId>,
        language_id: Option<LanguageId>,
    ) -> Self {
        Self {
            id,
            title,
            author_id,
            summary,
            isbn,
            genre_ids,
            language_id,
        }
    }
}
