mod postgres;
mod redis;

pub use self::{postgres::*, redis::*};
