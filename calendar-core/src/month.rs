//! Month table: candidate dates and colours, with a round-robin cursor per month.

use crate::{
    error::{Result, SimError},
    types::{MONTH_COUNT, MonthIndex, Rgb},
};

/// Dates and colour strings of the built-in calendar, January first.
const STANDARD_TABLE: [(&[u8], &str); MONTH_COUNT] = [
    (&[1, 2, 3, 10, 11, 17, 18, 24, 25, 31], "#FEF852"),
    (&[1, 7, 8, 15, 16, 17, 18, 19, 20, 21, 22, 23], "#EF333A"),
    (&[1, 7, 8, 14, 15, 21, 22, 28, 29], "#A4D165"),
    (&[4, 5, 6, 11, 12, 18, 19, 25, 26], "#FFFFFF"),
    (&[1, 2, 3, 4, 5, 10, 16, 17, 23, 24, 30, 31], "#F18D83"),
    (&[6, 7, 13, 14, 19, 20, 21, 27, 28], "#FEF852"),
    (&[4, 5, 11, 12, 18, 19, 25, 26], "#2550B3"),
    (&[1, 2, 8, 9, 15, 16, 22, 23, 29, 30], "#F0AE53"),
    (&[5, 6, 12, 13, 19, 25, 26, 27], "#26A460"),
    (&[1, 2, 3, 4, 5, 6, 7, 11, 17, 18, 24, 25, 31], "#BBA783"),
    (&[1, 7, 8, 14, 15, 21, 22, 28, 29], "#BBA783"),
    (&[5, 6, 12, 13, 19, 20, 26, 27], "#27AAE1"),
];

#[derive(Clone, Debug)]
pub struct MonthRecord {
    dates: Vec<u8>,
    color: Rgb,
    cursor: usize,
}

impl MonthRecord {
    /// Creates a record with its cursor on the first date.
    ///
    /// ### Errors
    /// [`SimError::InvalidConfiguration`] if `dates` is empty or holds a
    /// date outside `1..=31`.
    pub fn new(dates: Vec<u8>, color: Rgb) -> Result<Self> {
        if dates.is_empty() {
            return Err(SimError::InvalidConfiguration(
                "month has no candidate dates".to_string(),
            ));
        }
        if let Some(bad) = dates.iter().find(|d| !(1..=31).contains(*d)) {
            return Err(SimError::InvalidConfiguration(format!(
                "month has out-of-range date {bad}"
            )));
        }
        Ok(Self {
            dates,
            color,
            cursor: 0,
        })
    }

    pub fn dates(&self) -> &[u8] {
        &self.dates
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the date under the cursor and moves the cursor forward,
    /// wrapping at the end of the list.
    pub fn advance(&mut self) -> u8 {
        let date = self.dates[self.cursor];
        self.cursor = (self.cursor + 1) % self.dates.len();
        date
    }
}

/// The twelve month records, created once at startup.
#[derive(Clone, Debug)]
pub struct MonthRegistry {
    months: Vec<MonthRecord>,
}

impl MonthRegistry {
    /// Builds a registry from exactly twelve records.
    ///
    /// ### Errors
    /// [`SimError::InvalidConfiguration`] when the record count is not 12.
    /// Each record already validated its dates in [`MonthRecord::new`].
    pub fn new(months: Vec<MonthRecord>) -> Result<Self> {
        if months.len() != MONTH_COUNT {
            return Err(SimError::InvalidConfiguration(format!(
                "expected {MONTH_COUNT} months, got {}",
                months.len()
            )));
        }
        Ok(Self { months })
    }

    /// The built-in holiday calendar.
    pub fn standard() -> Result<Self> {
        let months = STANDARD_TABLE
            .iter()
            .map(|(dates, hex)| -> Result<MonthRecord> {
                MonthRecord::new(dates.to_vec(), Rgb::from_hex(hex)?)
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(months)
    }

    pub fn month(&self, month: MonthIndex) -> Option<&MonthRecord> {
        self.months.get(month)
    }

    /// Returns the next date of `month` together with the month colour.
    ///
    /// Repeated calls cycle through the month's dates in table order.
    ///
    /// ### Errors
    /// [`SimError::InvalidArgument`] if `month` is not in `0..12`.
    pub fn next_date(&mut self, month: MonthIndex) -> Result<(u8, Rgb)> {
        let record = self.months.get_mut(month).ok_or_else(|| {
            SimError::InvalidArgument(format!("month index {month} out of range"))
        })?;
        Ok((record.advance(), record.color))
    }
}
