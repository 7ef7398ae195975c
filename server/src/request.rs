mod author;
mod book;
mod loan;
mod page;
mod renewal;
mod summary;

pub use self::{author::*, book::*, loan::*, page::*, renewal::*, summary::*};
