mod consts;
mod greet;
mod month;
mod prelude;
mod types;

pub use consts::*;
pub use greet::{BasicGreeter, DelegatingGreeter, Greeter};
pub use month::Month;
pub use types::{
    MONTH_DESCRIPTORS, MonthDescriptor, Ordinal, Weekday, days_in_month, first_weekday,
    is_leap_year,
};

use serde::Serialize;
use std::fmt;

/// Error type for month construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MonthError {
    /// Ordinal outside the 1..=12 range; never clamped or wrapped.
    #[error("Invalid month ordinal: {0} (must be 1-12)")]
    InvalidOrdinal(u8),
}

/// A calendar year composed of twelve months, January through December.
/// Construction is infallible for any integer year and never exposes a
/// partially-populated month sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Year {
    number: i32,
    months: [Month; MONTHS_PER_YEAR as usize],
}

impl Year {
    /// Builds the year `number` with all twelve months in ordinal order.
    /// February's day count follows the four-year leap cycle.
    pub fn new(number: i32) -> Self {
        let months =
            std::array::from_fn(|index| Month::from_descriptor(number, &MONTH_DESCRIPTORS[index]));
        Self { number, months }
    }

    /// Returns the year number
    #[inline]
    pub const fn number(&self) -> i32 {
        self.number
    }

    /// Returns the twelve months in ordinal order (index 0 = January)
    #[inline]
    pub const fn months(&self) -> &[Month; MONTHS_PER_YEAR as usize] {
        &self.months
    }
}

impl From<i32> for Year {
    fn from(number: i32) -> Self {
        Self::new(number)
    }
}

impl fmt::Display for Year {
    // Year number, then each month rendering with the duplicated year
    // field stripped, in ordinal order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{YEAR_SEPARATOR}", self.number)?;
        for (index, month) in self.months.iter().enumerate() {
            if index > 0 {
                f.write_str(MONTH_SEPARATOR)?;
            }
            write!(
                f,
                "{},{},{},{}",
                month.ordinal(),
                month.name(),
                month.day_count(),
                month.first_weekday()
            )?;
        }
        Ok(())
    }
}
