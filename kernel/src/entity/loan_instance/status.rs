use std::fmt::{Display, Formatter};

use error_stack::Report;
use serde::{Deserialize, Serialize};

use crate::KernelError;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoanStatus {
    #[default]
    Maintenance,
    OnLoan,
    Available,
    Reserved,
}

impl LoanStatus {
    /// Single letter code used in storage.
    pub fn code(&self) -> &'static str {
        match self {
            LoanStatus::Maintenance => "m",
            LoanStatus::OnLoan => "o",
            LoanStatus::Available => "a",
            LoanStatus::Reserved => "r",
        }
    }
}

impl Display for LoanStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            LoanStatus::Maintenance => write!(f, "Maintenance"),
            LoanStatus::OnLoan => write!(f, "On loan"),
            LoanStatus::Available => write!(f, "Available"),
            LoanStatus::Reserved => write!(f, "Reserved"),
        }
    }
}

impl TryFrom<&str> for LoanStatus {
    type Error = Report<KernelError>;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "m" => Ok(LoanStatus::Maintenance),
            "o" => Ok(LoanStatus::OnLoan),
            "a" => Ok(LoanStatus::Available),
            "r" => Ok(LoanStatus::Reserved),
            _ => Err(Report::new(KernelError::Internal)
                .attach_printable(format!("Unknown loan status code: {value}"))),
        }
    }
}

#[cfg(test)]
mod test {
    use super::LoanStatus;

    #[test]
    fn code_is_reversible() {
        for status in [
            LoanStatus::Maintenance,
            LoanStatus::OnLoan,
            LoanStatus::Available,
            LoanStatus::Reserved,
        ] {
            assert_eq!(LoanStatus::try_from(status.code()).ok(), Some(status));
        }
    }

    #[test]
    fn unknown_code_is_rejected() {
        assert!(LoanStatus::try_from("x").is_err());
    }
}
