use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A frequency rating on the 0–4 Likert scale ("never" .. "always").
///
/// Only valid values can be constructed, so anything holding an
/// `AnswerValue` can score it without re-checking the range.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct AnswerValue(u8);

impl AnswerValue {
    pub const MIN: AnswerValue = AnswerValue(0);
    pub const MAX: AnswerValue = AnswerValue(4);

    /// The whole scale, lowest first.
    pub const ALL: [AnswerValue; 5] = [
        AnswerValue(0),
        AnswerValue(1),
        AnswerValue(2),
        AnswerValue(3),
        AnswerValue(4),
    ];

    /// Answers at or above this value are reported as findings.
    pub const FINDING_THRESHOLD: AnswerValue = AnswerValue(3);

    pub fn new(value: u8) -> Result<Self, CoreError> {
        if value <= Self::MAX.0 {
            Ok(Self(value))
        } else {
            Err(CoreError::InvalidAnswerValue(value))
        }
    }

    pub fn get(&self) -> u8 {
        self.0
    }

    pub fn as_f64(&self) -> f64 {
        f64::from(self.0)
    }

    pub fn label(&self) -> &'static str {
        match self.0 {
            0 => "Never",
            1 => "Rarely",
            2 => "Sometimes",
            3 => "Often",
            _ => "Always",
        }
    }

    pub fn is_finding(&self) -> bool {
        *self >= Self::FINDING_THRESHOLD
    }
}

impl TryFrom<u8> for AnswerValue {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        AnswerValue::new(value)
    }
}

impl From<AnswerValue> for u8 {
    fn from(value: AnswerValue) -> Self {
        value.0
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Recorded answers keyed by question id.
pub type AnswerMap = BTreeMap<String, AnswerValue>;
