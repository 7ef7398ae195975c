use serde::{Deserialize, Serialize};

/// Record kinds held by the catalog, used for summary counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogKind {
    Book,
    Author,
    Genre,
    LoanInstance,
}

