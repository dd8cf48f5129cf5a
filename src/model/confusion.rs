use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountField {
    TruePositive,
    TrueNegative,
    FalsePositive,
    FalseNegative,
}

pub const COUNT_FIELDS: [CountField; 4] = [
    CountField::TruePositive,
    CountField::TrueNegative,
    CountField::FalsePositive,
    CountField::FalseNegative,
];

impl CountField {
    pub fn abbrev(self) -> &'static str {
        match self {
            CountField::TruePositive => "TP",
            CountField::TrueNegative => "TN",
            CountField::FalsePositive => "FP",
            CountField::FalseNegative => "FN",
        }
    }
}

impl std::fmt::Display for CountField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CountField::TruePositive => "True positives",
            CountField::TrueNegative => "True negatives",
            CountField::FalsePositive => "False positives",
            CountField::FalseNegative => "False negatives",
        };
        write!(f, "{name} ({})", self.abbrev())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatrixError {
    #[error("{field} must be non-negative, got {value}")]
    NegativeCount { field: CountField, value: i64 },
    #[error("total of the four counts does not fit in 64 bits")]
    TotalOverflow,
}

/// A 2x2 confusion matrix for a binary classifier.
///
/// Counts are fixed at construction; every metric is derived on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConfusionMatrix {
    true_positive: u64,
    true_negative: u64,
    false_positive: u64,
    false_negative: u64,
    total: u64,
}

impl ConfusionMatrix {
    /// Builds a matrix from signed counts, rejecting the first negative one
    /// in TP, TN, FP, FN order.
    pub fn new(
        true_positive: i64,
        true_negative: i64,
        false_positive: i64,
        false_negative: i64,
    ) -> Result<Self, MatrixError> {
        let tp = non_negative(CountField::TruePositive, true_positive)?;
        let tn = non_negative(CountField::TrueNegative, true_negative)?;
        let fp = non_negative(CountField::FalsePositive, false_positive)?;
        let fn_ = non_negative(CountField::FalseNegative, false_negative)?;
        Self::from_counts(tp, tn, fp, fn_)
    }

    pub fn from_counts(
        true_positive: u64,
        true_negative: u64,
        false_positive: u64,
        false_negative: u64,
    ) -> Result<Self, MatrixError> {
        let total = true_positive
            .checked_add(true_negative)
            .and_then(|v| v.checked_add(false_positive))
            .and_then(|v| v.checked_add(false_negative))
            .ok_or(MatrixError::TotalOverflow)?;
        Ok(Self {
            true_positive,
            true_negative,
            false_positive,
            false_negative,
            total,
        })
    }

    pub fn true_positive(&self) -> u64 {
        self.true_positive
    }

    pub fn true_negative(&self) -> u64 {
        self.true_negative
    }

    pub fn false_positive(&self) -> u64 {
        self.false_positive
    }

    pub fn false_negative(&self) -> u64 {
        self.false_negative
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn count(&self, field: CountField) -> u64 {
        match field {
            CountField::TruePositive => self.true_positive,
            CountField::TrueNegative => self.true_negative,
            CountField::FalsePositive => self.false_positive,
            CountField::FalseNegative => self.false_negative,
        }
    }
}

/// `[TP, TN, FP, FN]`. Four `u32` counts always fit the `u64` total.
impl From<[u32; 4]> for ConfusionMatrix {
    fn from([tp, tn, fp, fn_]: [u32; 4]) -> Self {
        let (tp, tn, fp, fn_) = (tp as u64, tn as u64, fp as u64, fn_ as u64);
        Self {
            true_positive: tp,
            true_negative: tn,
            false_positive: fp,
            false_negative: fn_,
            total: tp + tn + fp + fn_,
        }
    }
}

fn non_negative(field: CountField, value: i64) -> Result<u64, MatrixError> {
    u64::try_from(value).map_err(|_| MatrixError::NegativeCount { field, value })
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/confusion.rs"]
mod tests;
