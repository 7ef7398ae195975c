mod kind;
mod operation;

pub use self::{kind::*, operation::*};
