use time::{Date, OffsetDateTime, UtcOffset};

use kernel::interface::clock::Clock;

/// Wall clock pinned to one UTC offset.
///
/// The offset is captured once by [`SystemClock::local`], which must run before any
/// other thread is spawned: `time` refuses to read the local offset from a
/// multi-threaded process on Unix.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: UtcOffset,
}

impl SystemClock {
    pub fn new(offset: UtcOffset) -> Self {
        Self { offset }
    }

    /// Server-local offset, or UTC when it cannot be determined.
    pub fn local() -> Self {
        let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
        Self::new(offset)
    }

    pub fn offset(&self) -> UtcOffset {
        self.offset
    }

    fn date_at(&self, now: OffsetDateTime) -> Date {
        now.to_offset(self.offset).date()
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new(UtcOffset::UTC)
    }
}

impl Clock for SystemClock {
    fn today(&self) -> Date {
        self.date_at(OffsetDateTime::now_utc())
    }
}

#[cfg(test)]
mod test {
    use time::macros::{date, datetime, offset};
    use time::{Duration, OffsetDateTime};

    use kernel::interface::clock::Clock;

    use super::SystemClock;

    #[test]
    fn date_follows_configured_offset() {
        let now = datetime!(2024-01-02 01:00 UTC);
        assert_eq!(SystemClock::new(offset!(-5)).date_at(now), date!(2024 - 01 - 01));
        assert_eq!(SystemClock::new(offset!(+9)).date_at(now), date!(2024 - 01 - 02));
        assert_eq!(SystemClock::default().date_at(now), date!(2024 - 01 - 02));
    }

    #[test]
    fn today_is_close_to_utc_date() {
        let utc = OffsetDateTime::now_utc().date();
        let today = SystemClock::new(offset!(-5)).today();
        assert!(today >= utc - Duration::days(1) && today <= utc);
    }
}
