use serde::Serialize;

use crate::MonthError;
use crate::prelude::*;
use crate::types::{MonthDescriptor, Ordinal, Weekday, days_in_month, first_weekday};

/// One calendar month of a specific year.
/// Immutable once constructed; the weekday of its first day is computed
/// at construction and carried alongside the stored attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[display(fmt = "{year},{ordinal},{name},{day_count},{first_weekday}")]
pub struct Month {
    year: i32,
    ordinal: Ordinal,
    name: &'static str,
    day_count: u8,
    first_weekday: Weekday,
}

impl Month {
    /// Constructs the month of `year` at `ordinal` (1 = January).
    /// Name and day count come from the descriptor table, with the
    /// four-year leap cycle applied to February.
    ///
    /// # Errors
    /// Returns `MonthError::InvalidOrdinal` if `ordinal` is 0 or > 12.
    pub fn new(year: i32, ordinal: u8) -> Result<Self, MonthError> {
        let ordinal = Ordinal::new(ordinal)?;
        Ok(Self::from_descriptor(year, MonthDescriptor::of(ordinal)))
    }

    /// Builds a month directly from a descriptor table entry.
    pub(crate) fn from_descriptor(year: i32, descriptor: &'static MonthDescriptor) -> Self {
        let ordinal = descriptor.ordinal();
        Self {
            year,
            ordinal,
            name: descriptor.name(),
            day_count: days_in_month(year, ordinal.get()),
            first_weekday: first_weekday(year, ordinal.get()),
        }
    }

    /// Returns the year this month belongs to
    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the ordinal as u8 for convenience (1 = January)
    #[inline]
    pub const fn ordinal(&self) -> u8 {
        self.ordinal.get()
    }

    /// Returns the Ordinal type
    #[inline]
    pub const fn ordinal_typed(&self) -> Ordinal {
        self.ordinal
    }

    /// Returns the canonical month name
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the number of days in this month
    #[inline]
    pub const fn day_count(&self) -> u8 {
        self.day_count
    }

    /// Returns the weekday of the first day of this month
    #[inline]
    pub const fn first_weekday(&self) -> Weekday {
        self.first_weekday
    }

    /// Returns the name of the weekday of the first day of this month
    #[inline]
    pub const fn first_weekday_name(&self) -> &'static str {
        self.first_weekday.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_january() {
        let month = Month::new(2017, 1).unwrap();
        assert_eq!(month.year(), 2017);
        assert_eq!(month.ordinal(), 1);
        assert_eq!(month.name(), "January");
        assert_eq!(month.day_count(), 31);
        assert_eq!(month.first_weekday(), Weekday::Sunday);
        assert_eq!(month.first_weekday_name(), "Sunday");
    }

    #[test]
    fn test_new_invalid_ordinal_zero() {
        let result = Month::new(2017, 0);
        assert!(matches!(result, Err(MonthError::InvalidOrdinal(0))));
    }

    #[test]
    fn test_new_invalid_ordinal_thirteen() {
        let result = Month::new(2017, 13);
        assert!(matches!(result, Err(MonthError::InvalidOrdinal(13))));
    }

    #[test]
    fn test_new_february_leap_cycle() {
        assert_eq!(Month::new(2016, 2).unwrap().day_count(), 29);
        assert_eq!(Month::new(2017, 2).unwrap().day_count(), 28);
        // Century years follow the plain four-year cycle
        assert_eq!(Month::new(1900, 2).unwrap().day_count(), 29);
    }

    #[test]
    fn test_new_negative_year() {
        let month = Month::new(-4, 2).unwrap();
        assert_eq!(month.day_count(), 29);

        let month = Month::new(-3, 2).unwrap();
        assert_eq!(month.day_count(), 28);
    }

    #[test]
    fn test_ordinal_typed() {
        let month = Month::new(2017, 8).unwrap();
        assert_eq!(month.ordinal_typed(), Ordinal::new(8).unwrap());
    }

    #[test]
    fn test_display() {
        let month = Month::new(2017, 1).unwrap();
        assert_eq!(month.to_string(), "2017,1,January,31,Sunday");

        let month = Month::new(2016, 2).unwrap();
        assert_eq!(month.to_string(), "2016,2,February,29,Monday");
    }

    #[test]
    fn test_display_is_deterministic() {
        let a = Month::new(2024, 6).unwrap();
        let b = Month::new(2024, 6).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn test_serialize() {
        let month = Month::new(2017, 1).unwrap();
        let json = serde_json::to_string(&month).unwrap();
        assert_eq!(
            json,
            r#"{"year":2017,"ordinal":1,"name":"January","day_count":31,"first_weekday":"Sunday"}"#
        );
    }
}
