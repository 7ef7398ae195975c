mod author;
mod book;
mod genre;
mod language;
mod loan_instance;
mod statistics;

pub use self::{author::*, book::*, genre::*, language::*, loan_instance::*, statistics::*};
