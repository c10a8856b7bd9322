use chrono::{DateTime, NaiveDate};

pub trait ClockPort: Send + Sync {
    fn now_ms(&self) -> i64;

    /// Calendar date of `now_ms` in UTC.
    fn today_utc(&self) -> NaiveDate {
        DateTime::from_timestamp_millis(self.now_ms())
            .map(|now| now.date_naive())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct At(i64);

    impl ClockPort for At {
        fn now_ms(&self) -> i64 {
            self.0
        }
    }

    #[test]
    fn today_is_the_utc_date_of_now() {
        // 2024-03-01T23:59:59.999Z
        assert_eq!(
            At(1_709_337_599_999).today_utc(),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
        assert_eq!(
            At(1_709_337_600_000).today_utc(),
            NaiveDate::from_ymd_opt(2024, 3, 2).unwrap()
        );
    }
}
