use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new(id: impl Into<Uuid>) -> Self {
        Self(id.into())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Fromln, AsRefln)]
pub struct VisitCount(i64);

impl VisitCount {
    pub fn new(count: impl Into<i64>) -> Self {
        Self(count.into().max(0))
    }
}
