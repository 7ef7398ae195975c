mod author;
mod book;
mod loan;
mod renewal;
mod summary;

pub use self::{author::*, book::*, loan::*, renewal::*, summary::*};
