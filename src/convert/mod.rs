//! Unit conversion engine
//!
//! Linear categories scale through a base unit; non-linear ones go through
//! a pivot formula. Every function here is pure and works on `'static`
//! tables only, so it can be called from any thread.
//!
//! # Example
//!
//! ```rust
//! use meterkit::convert::{Category, convert, convert_input};
//!
//! let metres = convert(Category::Length, 1.0, "km", "m").unwrap();
//! assert_eq!(metres, 1000.0);
//!
//! let shown = convert_input(Category::Temperature, "100", "Celsius", "Fahrenheit").unwrap();
//! assert_eq!(shown.to_string(), "212 Fahrenheit");
//! ```

mod category;
mod format;
mod formulas;
mod tables;

use std::fmt;

use thiserror::Error;

pub use category::{Category, CategoryKind, Industry};
pub use format::format_significant;
pub use formulas::{FormulaUnit, PivotFormula};
pub use tables::UnitTable;

/// Significant digits used when displaying a result.
pub const DISPLAY_DIGITS: usize = 6;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConvertError {
    #[error("Unknown conversion category: {0}")]
    UnknownCategory(String),
    #[error("Unknown unit {unit:?} for {category} conversion")]
    UnknownUnit { category: Category, unit: String },
    #[error("Please enter a valid number")]
    InvalidNumber { input: String },
    #[error("{value} {from} has no finite value in {to}")]
    Domain {
        category: Category,
        value: f64,
        from: String,
        to: String,
    },
}

/// A converted value and the unit it is expressed in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity {
    pub value: f64,
    pub unit: &'static str,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", format_significant(self.value, DISPLAY_DIGITS), self.unit)
    }
}

/// Parses user input into a finite number.
///
/// Surrounding whitespace is ignored and single underscores between digits
/// group them (`1_000`). Empty, non-numeric and non-finite input (`inf`,
/// `NaN`) is rejected.
pub fn parse_value(input: &str) -> Result<f64, ConvertError> {
    let invalid = || ConvertError::InvalidNumber { input: input.to_string() };
    let digits = strip_digit_separators(input.trim()).ok_or_else(invalid)?;
    match digits.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(invalid()),
    }
}

/// Removes `_` separators. `None` if one is not flanked by ASCII digits.
fn strip_digit_separators(s: &str) -> Option<String> {
    let bytes = s.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b != b'_' {
            continue;
        }
        let before = i.checked_sub(1).and_then(|j| bytes.get(j));
        let after = bytes.get(i + 1);
        if !matches!((before, after), (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit()) {
            return None;
        }
    }
    Some(s.replace('_', ""))
}

/// Converts `value` from one unit of `category` to another.
///
/// Both units are validated first. Equal units return `value` unchanged,
/// for every category. A conversion whose pivot or result is not finite
/// (moisture at 100 % wet basis, zero fuel efficiency) fails with
/// [`ConvertError::Domain`] instead of returning infinity or NaN.
pub fn convert(category: Category, value: f64, from: &str, to: &str) -> Result<f64, ConvertError> {
    convert_quantity(category, value, from, to).map(|q| q.value)
}

/// Parses `input` and converts it, returning the result with its unit for display.
pub fn convert_input(
    category: Category,
    input: &str,
    from: &str,
    to: &str,
) -> Result<Quantity, ConvertError> {
    let value = parse_value(input)?;
    convert_quantity(category, value, from, to)
}

fn convert_quantity(
    category: Category,
    value: f64,
    from: &str,
    to: &str,
) -> Result<Quantity, ConvertError> {
    let unknown = |unit: &str| ConvertError::UnknownUnit {
        category,
        unit: unit.to_string(),
    };
    let domain = || ConvertError::Domain {
        category,
        value,
        from: from.to_string(),
        to: to.to_string(),
    };

    let (unit, result) = match category.kind() {
        CategoryKind::Linear(table) => {
            let (_, from_factor) = table.lookup(from).ok_or_else(|| unknown(from))?;
            let (unit, to_factor) = table.lookup(to).ok_or_else(|| unknown(to))?;
            check_finite(value)?;
            if from == to {
                return Ok(Quantity { value, unit });
            }
            (unit, value * from_factor / to_factor)
        }
        CategoryKind::Formula(formula) => {
            let source = formula.unit(from).ok_or_else(|| unknown(from))?;
            let target = formula.unit(to).ok_or_else(|| unknown(to))?;
            check_finite(value)?;
            if from == to {
                return Ok(Quantity { value, unit: target.name });
            }
            let pivot = (source.to_pivot)(value);
            if !pivot.is_finite() {
                #[cfg(feature = "tracing")]
                tracing::debug!("{} conversion of {} {} left the domain at the pivot", category, value, from);
                return Err(domain());
            }
            (target.name, (target.from_pivot)(pivot))
        }
    };

    if !result.is_finite() {
        #[cfg(feature = "tracing")]
        tracing::debug!("{} conversion of {} {} to {} is not finite", category, value, from, to);
        return Err(domain());
    }
    Ok(Quantity { value: result, unit })
}

fn check_finite(value: f64) -> Result<(), ConvertError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConvertError::InvalidNumber { input: value.to_string() })
    }
}
