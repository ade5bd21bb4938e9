//! Unit tables and the denomination selector
//!
//! A unit table is an ordered set of named units (coins or weight measures),
//! each with a ratio to the dimension's base unit: gold pieces for currency,
//! pounds for weight. The selector picks the most natural unit/quantity pair
//! for a raw base value, e.g. "3 gp" rather than "300 cp" or "0.03 pp".

use once_cell::sync::Lazy;
use thiserror::Error;

use crate::core::numfmt::int_digits;

/// Errors raised by the denomination selector.
#[derive(Debug, Error)]
pub enum ShopError {
    #[error("cannot pick a denomination for {0}: value must be finite and non-negative")]
    InvalidValue(f64),
}

/// Standard D&D coinage, in gold pieces.
pub static STANDARD_CURRENCY: Lazy<UnitTable> = Lazy::new(|| {
    let mut table = UnitTable::new();
    table.insert("gp", 1.0);
    table.insert("sp", 0.1);
    table.insert("cp", 0.01);
    table
});

/// Standard weight units, in pounds.
pub static STANDARD_WEIGHT: Lazy<UnitTable> = Lazy::new(|| {
    let mut table = UnitTable::new();
    table.insert("ton", 2000.0);
    table.insert("lb.", 1.0);
    table.insert("oz", 1.0 / 16.0);
    table
});

/// An ordered collection of (label, ratio) pairs. Labels are unique; a
/// repeated insert overrides the ratio in place.
#[derive(Debug, Clone, Default)]
pub struct UnitTable {
    units: Vec<(String, f64)>,
}

impl UnitTable {
    pub fn new() -> Self {
        Self { units: Vec::new() }
    }

    /// Add a unit, overriding the ratio if the label already exists.
    pub fn insert(&mut self, label: impl Into<String>, ratio: f64) {
        let label = label.into();
        if let Some(entry) = self.units.iter_mut().find(|(l, _)| *l == label) {
            entry.1 = ratio;
        } else {
            self.units.push((label, ratio));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.units.iter().map(|(l, r)| (l.as_str(), *r))
    }

    /// The finest-grained unit: smallest ratio, ties broken by label.
    fn smallest(&self) -> Option<(&str, f64)> {
        self.units
            .iter()
            .min_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(&b.0)))
            .map(|(l, r)| (l.as_str(), *r))
    }
}

/// A `label=ratio` pair as given on the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitSpec {
    pub label: String,
    pub ratio: f64,
}

/// Parse a `LABEL=RATIO` argument. Used as a clap value parser so malformed
/// specs fail at argument-parsing time with the offending argument named.
pub fn parse_unit_spec(arg: &str) -> Result<UnitSpec, String> {
    let parts: Vec<&str> = arg.split('=').collect();
    if parts.len() != 2 {
        return Err(format!(
            "invalid unit argument \"{arg}\": must be in the form LABEL=RATIO"
        ));
    }
    let label = parts[0].trim();
    if label.is_empty() {
        return Err(format!("invalid unit argument \"{arg}\": label is empty"));
    }
    let ratio: f64 = parts[1]
        .trim()
        .parse()
        .map_err(|_| format!("invalid unit argument \"{arg}\": ratio must be a decimal number"))?;
    if !ratio.is_finite() || ratio <= 0.0 {
        return Err(format!(
            "invalid unit argument \"{arg}\": ratio must be a positive number"
        ));
    }
    Ok(UnitSpec {
        label: label.to_string(),
        ratio,
    })
}

/// Layer user-supplied specs over an optional standard set. Later specs
/// override earlier entries with the same label.
pub fn build_table(standard: Option<&UnitTable>, specs: &[UnitSpec]) -> UnitTable {
    let mut table = standard.cloned().unwrap_or_default();
    for spec in specs {
        table.insert(spec.label.clone(), spec.ratio);
    }
    table
}

/// A quantity expressed in a chosen unit. An empty unit label means the
/// table had no units and the quantity is the raw base value, rounded.
#[derive(Debug, Clone, PartialEq)]
pub struct Denomination {
    pub quantity: f64,
    pub unit: String,
}

/// Pick the most natural denomination for `value`.
///
/// Every unit yields a candidate whole count of `floor(value / ratio)`.
/// Candidates are sorted ascending by (count, label) and scanned for the
/// first whose integer-digit count reaches `sigfigs`; the last candidate is
/// never inspected and serves as the fallback when none qualifies. A pick
/// whose count is zero or less falls back to the finest denomination, and is
/// clamped to exactly 1 when `forbid_zero` is set.
pub fn select(
    value: f64,
    units: &UnitTable,
    sigfigs: u32,
    forbid_zero: bool,
) -> Result<Denomination, ShopError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ShopError::InvalidValue(value));
    }
    if units.is_empty() {
        let scale = 10f64.powi(sigfigs as i32);
        return Ok(Denomination {
            quantity: (value * scale).round() / scale,
            unit: String::new(),
        });
    }

    let mut candidates: Vec<(i64, &str)> = units
        .iter()
        .map(|(label, ratio)| ((value / ratio).floor() as i64, label))
        .collect();
    candidates.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(b.1)));

    let mut picked = candidates.len() - 1;
    for (i, (count, _)) in candidates.iter().enumerate().take(candidates.len() - 1) {
        if int_digits(*count as f64) >= sigfigs as i32 {
            picked = i;
            break;
        }
    }
    let (mut count, mut label) = candidates[picked];

    if count <= 0 {
        // Value rounds to nothing in the picked unit; use the finest
        // denomination instead.
        if let Some((fine_label, fine_ratio)) = units.smallest() {
            label = fine_label;
            count = (value / fine_ratio).floor() as i64;
        }
        if forbid_zero && count <= 0 {
            count = 1;
        }
    }

    Ok(Denomination {
        quantity: count as f64,
        unit: label.to_string(),
    })
}
