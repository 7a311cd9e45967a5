//! Calendar periods a run can be requested for.

use chrono::{Months, NaiveDate};

/// A calendar year.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Year(pub i32);

/// A calendar month, stored as `(year, month)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Month(pub i32, pub u32);

impl Month {
    pub fn new(month: u32, year: i32) -> Self {
        Self(year, month)
    }
}

/// An inclusive range of calendar days.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Every day from `start` to `end`, inclusive. Empty when `start > end`.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }

    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// Anything that resolves to a [`DateRange`].
///
/// ```
/// use et0::{DatePeriod, Month};
///
/// let july = Month::new(7, 2022).get_date_period().unwrap();
/// assert_eq!(july.num_days(), 31);
/// ```
pub trait DatePeriod {
    fn get_date_period(self) -> Option<DateRange>;
}

impl DatePeriod for DateRange {
    fn get_date_period(self) -> Option<DateRange> {
        Some(self)
    }
}

impl DatePeriod for NaiveDate {
    fn get_date_period(self) -> Option<DateRange> {
        Some(DateRange {
            start: self,
            end: self,
        })
    }
}

impl DatePeriod for (NaiveDate, NaiveDate) {
    fn get_date_period(self) -> Option<DateRange> {
        Some(DateRange {
            start: self.0,
            end: self.1,
        })
    }
}

impl DatePeriod for Year {
    fn get_date_period(self) -> Option<DateRange> {
        Some(DateRange {
            start: NaiveDate::from_ymd_opt(self.0, 1, 1)?,
            end: NaiveDate::from_ymd_opt(self.0, 12, 31)?,
        })
    }
}

impl DatePeriod for Month {
    fn get_date_period(self) -> Option<DateRange> {
        let start = NaiveDate::from_ymd_opt(self.0, self.1, 1)?;
        let end = start.checked_add_months(Months::new(1))?.pred_opt()?;
        Some(DateRange { start, end })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_period() {
        let range = Year(2022).get_date_period().unwrap();
        assert_eq!(range.start, NaiveDate::from_ymd_opt(2022, 1, 1).unwrap());
        assert_eq!(range.end, NaiveDate::from_ymd_opt(2022, 12, 31).unwrap());
        assert_eq!(range.days().count(), 365);
    }

    #[test]
    fn test_month_period() {
        let range = Month::new(2, 2024).get_date_period().unwrap();
        assert_eq!(range.num_days(), 29);
        assert_eq!(Month::new(2, 2023).get_date_period().unwrap().num_days(), 28);

        let december = Month::new(12, 2022).get_date_period().unwrap();
        assert_eq!(december.end, NaiveDate::from_ymd_opt(2022, 12, 31).unwrap());

        assert!(Month::new(0, 2024).get_date_period().is_none());
        assert!(Month::new(13, 2024).get_date_period().is_none());
    }

    #[test]
    fn test_single_day_and_pair() {
        let day = NaiveDate::from_ymd_opt(2022, 7, 1).unwrap();
        assert_eq!(day.get_date_period().unwrap().days().collect::<Vec<_>>(), vec![day]);

        let end = NaiveDate::from_ymd_opt(2022, 7, 3).unwrap();
        let days: Vec<NaiveDate> = (day, end).get_date_period().unwrap().days().collect();
        assert_eq!(days.len(), 3);
        assert_eq!(days.last(), Some(&end));
    }

    #[test]
    fn test_reversed_range_is_empty() {
        let range = DateRange {
            start: NaiveDate::from_ymd_opt(2022, 7, 3).unwrap(),
            end: NaiveDate::from_ymd_opt(2022, 7, 1).unwrap(),
        };
        assert_eq!(range.days().count(), 0);
    }
}
