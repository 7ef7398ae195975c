use std::fmt::{Display, Formatter};

use error_stack::{Context, Report};
use time::{Date, Duration};

use crate::entity::DueBack;

/// Offset of the renewal date proposed before staff submit anything.
pub const RENEWAL_DEFAULT_PERIOD: Duration = Duration::weeks(3);
/// Furthest a renewal may push the due date, counted from today.
pub const RENEWAL_MAX_PERIOD: Duration = Duration::weeks(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenewalRejection {
    DateInPast(Date),
    DateTooFarInFuture(Date),
}

impl RenewalRejection {
    /// The date that was submitted and refused.
    pub fn candidate(&self) -> Date {
        match self {
            RenewalRejection::DateInPast(date) | RenewalRejection::DateTooFarInFuture(date) => {
                *date
            }
        }
    }
}

impl Display for RenewalRejection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            RenewalRejection::DateInPast(_) => write!(f, "Invalid date - renewal in past"),
            RenewalRejection::DateTooFarInFuture(_) => {
                write!(f, "Invalid date - renewal more than 4 weeks ahead")
            }
        }
    }
}

impl Context for RenewalRejection {}

impl DueBack {
    pub fn proposed_renewal(today: Date) -> Self {
        Self::new(today.checked_add(RENEWAL_DEFAULT_PERIOD).unwrap_or(Date::MAX))
    }

    /// Accepts `candidate` when `today <= candidate <= today + 4 weeks`.
    pub fn renewal(today: Date, candidate: Date) -> error_stack::Result<Self, RenewalRejection> {
        if candidate < today {
            return Err(Report::new(RenewalRejection::DateInPast(candidate)));
        }
        // Past Date::MAX nothing can be later, so the upper bound does not apply.
        if let Some(limit) = today.checked_add(RENEWAL_MAX_PERIOD) {
            if candidate > limit {
                return Err(Report::new(RenewalRejection::DateTooFarInFuture(candidate))
                    .attach_printable(format!("latest allowed date is {limit}")));
            }
        }
        Ok(Self::new(candidate))
    }
}

#[cfg(test)]
mod test {
    use time::macros::date;
    use time::Duration;

    use super::RenewalRejection;
    use crate::entity::DueBack;

    #[test]
    fn proposes_three_weeks_ahead() {
        assert_eq!(
            DueBack::proposed_renewal(date!(2024 - 01 - 01)),
            DueBack::new(date!(2024 - 01 - 22))
        );
        assert_eq!(
            DueBack::proposed_renewal(date!(2023 - 12 - 20)),
            DueBack::new(date!(2024 - 01 - 10))
        );
    }

    #[test]
    fn rejects_dates_before_today() {
        let today = date!(2024 - 01 - 01);
        let report = DueBack::renewal(today, date!(2023 - 12 - 31)).unwrap_err();
        assert_eq!(
            report.current_context(),
            &RenewalRejection::DateInPast(date!(2023 - 12 - 31))
        );
    }

    #[test]
    fn rejects_dates_beyond_four_weeks() {
        let today = date!(2024 - 01 - 01);
        let report = DueBack::renewal(today, date!(2024 - 02 - 15)).unwrap_err();
        assert_eq!(
            report.current_context(),
            &RenewalRejection::DateTooFarInFuture(date!(2024 - 02 - 15))
        );

        let report = DueBack::renewal(today, date!(2024 - 01 - 30)).unwrap_err();
        assert!(matches!(
            report.current_context(),
            RenewalRejection::DateTooFarInFuture(_)
        ));
    }

    #[test]
    fn accepts_every_date_within_window() {
        let today = date!(2024 - 01 - 01);
        for days in 0..=28 {
            let candidate = today + Duration::days(days);
            let due_back = DueBack::renewal(today, candidate).expect("inside renewal window");
            assert_eq!(due_back, DueBack::new(candidate));
        }
    }

    #[test]
    fn rejection_reports_candidate_and_message() {
        let rejection = RenewalRejection::DateInPast(date!(2023 - 12 - 31));
        assert_eq!(rejection.candidate(), date!(2023 - 12 - 31));
        assert_eq!(rejection.to_string(), "Invalid date - renewal in past");
        assert_eq!(
            RenewalRejection::DateTooFarInFuture(date!(2024 - 02 - 15)).to_string(),
            "Invalid date - renewal more than 4 weeks ahead"
        );
    }

    #[test]
    fn upper_bound_near_calendar_end_is_ignored() {
        let today = time::Date::MAX - Duration::days(1);
        assert!(DueBack::renewal(today, time::Date::MAX).is_ok());
        assert_eq!(
            DueBack::proposed_renewal(today),
            DueBack::new(time::Date::MAX)
        );
    }
}
