mod author;
mod book;
mod catalog;
mod loan;
mod renewal;

pub use self::{author::*, book::*, catalog::*, loan::*, renewal::*};
