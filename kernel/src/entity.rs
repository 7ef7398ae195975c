mod author;
mod book;
mod common;
mod genre;
mod language;
mod loan_instance;
mod session;
mod user;

pub use self::{
    author::*, book::*, common::*, genre::*, language::*, loan_instance::*, session::*, user::*,
};
