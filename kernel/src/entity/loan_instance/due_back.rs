use serde::{Deserialize, Serialize};
use time::Date;
use vodca::{AsRefln, Fromln};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Fromln, AsRefln, Serialize, Deserialize,
)]
pub struct DueBack(Date);

impl DueBack {
    pub fn new(date: impl Into<Date>) -> Self {
        Self(date.into())
    }
}
