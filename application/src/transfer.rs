mod author;
mod book;
mod genre;
mod language;
mod loan;
mod page;
mod renewal;
mod summary;

pub use self::{
    author::*, book::*, genre::*, language::*, loan::*, page::*, renewal::*, summary::*,
};
