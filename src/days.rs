use chrono::{Datelike, NaiveDate};

const FINNISH: [&str; 7] = [
    "maanantai",
    "tiistai",
    "keskiviikko",
    "torstai",
    "perjantai",
    "lauantai",
    "sunnuntai",
];

const ENGLISH: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Finnish name of a weekday, Monday being 0. Indices wrap around.
pub const fn day_name_fi(day: usize) -> &'static str {
    FINNISH[day % 7]
}

/// English name of a weekday, Monday being 0. Indices wrap around.
pub const fn day_name_en(day: usize) -> &'static str {
    ENGLISH[day % 7]
}

/// The next day a menu is published for: Friday is followed by Monday.
pub const fn next_day(day: usize) -> usize {
    match day % 7 {
        4 | 6 => 0,
        d => d + 1,
    }
}

/// Today and the next menu day, used as the start and end markers when
/// slicing a weekly menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Days {
    today: usize,
    tomorrow: usize,
}

impl Days {
    pub const fn new(today: usize) -> Self {
        let today = today % 7;
        Self {
            today,
            tomorrow: next_day(today),
        }
    }

    /// The days for a calendar date.
    pub fn on(date: NaiveDate) -> Self {
        Self::new(date.weekday().num_days_from_monday() as usize)
    }

    pub const fn today_fi(&self) -> &'static str {
        day_name_fi(self.today)
    }

    pub const fn tomorrow_fi(&self) -> &'static str {
        day_name_fi(self.tomorrow)
    }

    pub const fn today_en(&self) -> &'static str {
        day_name_en(self.today)
    }

    pub const fn tomorrow_en(&self) -> &'static str {
        day_name_en(self.tomorrow)
    }

    pub const fn monday_fi() -> &'static str {
        day_name_fi(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_names() {
        let expected = [
            ("maanantai", "Monday"),
            ("tiistai", "Tuesday"),
            ("keskiviikko", "Wednesday"),
            ("torstai", "Thursday"),
            ("perjantai", "Friday"),
            ("lauantai", "Saturday"),
            ("sunnuntai", "Sunday"),
        ];
        for (i, (fi, en)) in expected.iter().enumerate() {
            assert_eq!(day_name_fi(i), *fi);
            assert_eq!(day_name_en(i), *en);
        }
    }

    #[test]
    fn test_tomorrow_wraps_friday_to_monday() {
        let days = Days::new(4);
        assert_eq!(days.tomorrow, 0);
        assert_eq!(days.today_fi(), "perjantai");
        assert_eq!(days.tomorrow_fi(), "maanantai");
        assert_eq!(days.tomorrow_en(), "Monday");
    }

    #[test]
    fn test_next_day_is_total() {
        let next: Vec<usize> = (0..7).map(next_day).collect();
        assert_eq!(next, vec![1, 2, 3, 4, 0, 6, 0]);
    }

    #[test]
    fn test_on_date() {
        // 2026-10-16 is a Friday
        let friday = Days::on(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());
        assert_eq!(friday, Days::new(4));
        assert_eq!(friday.today_en(), "Friday");
        assert_eq!(friday.tomorrow_fi(), Days::monday_fi());
        let sunday = Days::on(NaiveDate::from_ymd_opt(2026, 10, 18).unwrap());
        assert_eq!(sunday.today_fi(), "sunnuntai");
        assert_eq!(sunday.tomorrow_en(), "Monday");
    }
}
