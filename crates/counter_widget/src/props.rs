//! Construction options for the counter.
//!
//! Props are read exactly once, by [`Counter::new`](crate::Counter::new), and
//! are consumed there. After that the counter's own state is the only source
//! of truth.
//!
//! # Example
//!
//! ```rust
//! use counter_widget::CounterProps;
//!
//! let props = CounterProps::from_json(r#"{"initialCount": 5, "theme": "ignored"}"#).unwrap();
//! assert_eq!(props.initial_count, Some(5));
//! assert_eq!(props.starting_count(), 5);
//!
//! // Whole-number floats count as integers.
//! let props = CounterProps::from_json(r#"{"initialCount": 1e2}"#).unwrap();
//! assert_eq!(props.starting_count(), 100);
//!
//! // Anything that is not an integer falls back to zero.
//! let props = CounterProps::from_json(r#"{"initialCount": "five"}"#).unwrap();
//! assert_eq!(props.starting_count(), 0);
//! ```

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// Options accepted when creating a [`Counter`](crate::Counter).
///
/// Unknown keys are ignored when deserializing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CounterProps {
    /// Value the counter starts from. `None` means zero.
    #[serde(
        default,
        deserialize_with = "lenient_count",
        skip_serializing_if = "Option::is_none"
    )]
    pub initial_count: Option<i64>,
}

impl CounterProps {
    /// Creates empty props (the counter starts at zero).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            initial_count: None,
        }
    }

    /// Sets the starting value.
    #[must_use]
    pub const fn with_initial_count(mut self, count: i64) -> Self {
        self.initial_count = Some(count);
        self
    }

    /// Parses props from a JSON object such as `{"initialCount": 3}`.
    ///
    /// # Errors
    ///
    /// Returns an error only if `json` is not a well-formed JSON object.
    /// A malformed `initialCount` value is not an error.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Returns the value the counter will start from.
    #[must_use]
    pub const fn starting_count(&self) -> i64 {
        match self.initial_count {
            Some(count) => count,
            None => 0,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCount {
    Integer(i64),
    Float(f64),
    Other(IgnoredAny),
}

/// Smallest float above every `i64` (2^63).
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Converts `value` when it is a whole number inside the `i64` range.
#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn whole_number(value: f64) -> Option<i64> {
    (value.is_finite() && value.fract() == 0.0 && (-I64_BOUND..I64_BOUND).contains(&value))
        .then_some(value as i64)
}

fn lenient_count<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let count = match Option::<RawCount>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(RawCount::Integer(count)) => Some(count),
        Some(RawCount::Float(value)) => whole_number(value),
        Some(RawCount::Other(_)) => None,
    };
    if count.is_none() {
        tracing::warn!("initialCount is not an integer, starting from 0");
    }
    Ok(count)
}
