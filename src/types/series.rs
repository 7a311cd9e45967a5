//! The per-day ET0 output series.

use chrono::NaiveDate;

/// ET0 for one successfully processed day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Et0Entry {
    pub date: NaiveDate,
    /// reference evapotranspiration [mm day^-1]
    pub et0: f64,
}

impl Et0Entry {
    /// Date as written to the output table, `DD/MM/YYYY`.
    pub fn formatted_date(&self) -> String {
        self.date.format("%d/%m/%Y").to_string()
    }

    /// Shortest round-trip digits of the value: `3.0`, `8.261459931314384`,
    /// and exponent notation below 1e-4 or from 1e16 on (`3.2e-05`, `1e+16`).
    pub fn formatted_value(&self) -> String {
        format_value(self.et0)
    }
}

fn format_value(value: f64) -> String {
    let magnitude = value.abs();
    if !value.is_finite() || magnitude == 0.0 || (1e-4..1e16).contains(&magnitude) {
        return format!("{value:?}");
    }
    let scientific = format!("{value:e}");
    match scientific.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => scientific,
    }
}

/// Entries ordered by ascending date, at most one per date.
///
/// Days that could not be processed have no entry; the series is not
/// range-complete.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Et0Series {
    entries: Vec<Et0Entry>,
}

impl Et0Series {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry at its date position. An existing entry for the same
    /// date is replaced.
    pub fn insert(&mut self, entry: Et0Entry) {
        let idx = self.entries.partition_point(|e| e.date < entry.date);
        match self.entries.get_mut(idx) {
            Some(existing) if existing.date == entry.date => *existing = entry,
            _ => self.entries.insert(idx, entry),
        }
    }

    pub fn entries(&self) -> &[Et0Entry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Et0Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, date: NaiveDate) -> Option<f64> {
        self.entries
            .binary_search_by_key(&date, |e| e.date)
            .ok()
            .map(|idx| self.entries[idx].et0)
    }

    /// `(date, value)` text pairs in output order.
    pub fn to_rows(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .map(|e| (e.formatted_date(), e.formatted_value()))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Et0Series {
    type Item = &'a Et0Entry;
    type IntoIter = std::slice::Iter<'a, Et0Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Et0Entry> for Et0Series {
    fn from_iter<T: IntoIterator<Item = Et0Entry>>(iter: T) -> Self {
        let mut series = Et0Series::new();
        for entry in iter {
            series.insert(entry);
        }
        series
    }
}
