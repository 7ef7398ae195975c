use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, Fromln, AsRefln)]
pub struct LoanImprint(String);

impl LoanImprint {
    pub fn new(imprint: impl Into<String>) -> Self {
        Self(imprint.into())
    }
}
