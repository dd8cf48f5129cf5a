use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

use crate::model::confusion::ConfusionMatrix;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Sensitivity = 0,
    Specificity = 1,
    Accuracy = 2,
    Precision = 3,
    FScore = 4,
}

pub fn metric_order() -> &'static [Metric; 5] {
    &[
        Metric::Sensitivity,
        Metric::Specificity,
        Metric::Accuracy,
        Metric::Precision,
        Metric::FScore,
    ]
}

impl Metric {
    pub fn name(self) -> &'static str {
        match self {
            Metric::Sensitivity => "Sensitivity (Recall)",
            Metric::Specificity => "Specificity",
            Metric::Accuracy => "Accuracy",
            Metric::Precision => "Precision",
            Metric::FScore => "F-score",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Metric::Sensitivity => "sensitivity",
            Metric::Specificity => "specificity",
            Metric::Accuracy => "accuracy",
            Metric::Precision => "precision",
            Metric::FScore => "f_score",
        }
    }

    pub fn formula(self) -> &'static str {
        match self {
            Metric::Sensitivity => "TP / (TP + FN)",
            Metric::Specificity => "TN / (FP + TN)",
            Metric::Accuracy => "(TP + TN) / N",
            Metric::Precision => "TP / (TP + FP)",
            Metric::FScore => "2 x (P x S) / (P + S)",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Metric::Sensitivity => "share of actual positives correctly identified",
            Metric::Specificity => "share of actual negatives correctly identified",
            Metric::Accuracy => "share of all predictions that are correct",
            Metric::Precision => "share of positive predictions that are correct",
            Metric::FScore => "harmonic mean of precision and sensitivity",
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of one metric: the ratio, or the 0 fallback flagged as undefined
/// when its denominator is zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ratio {
    value: f64,
    defined: bool,
}

impl Ratio {
    pub fn undefined() -> Self {
        Self {
            value: 0.0,
            defined: false,
        }
    }

    fn of_counts(numerator: u128, denominator: u128) -> Self {
        if denominator == 0 {
            return Self::undefined();
        }
        Self {
            value: numerator as f64 / denominator as f64,
            defined: true,
        }
    }

    /// Lenient read: undefined ratios report 0.
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn is_defined(&self) -> bool {
        self.defined
    }

    pub fn strict(&self) -> Option<f64> {
        self.defined.then_some(self.value)
    }

    pub fn percent(&self) -> f64 {
        self.value * 100.0
    }
}

impl ConfusionMatrix {
    pub fn sensitivity(&self) -> Ratio {
        let tp = self.true_positive() as u128;
        Ratio::of_counts(tp, tp + self.false_negative() as u128)
    }

    pub fn specificity(&self) -> Ratio {
        let tn = self.true_negative() as u128;
        Ratio::of_counts(tn, self.false_positive() as u128 + tn)
    }

    pub fn accuracy(&self) -> Ratio {
        let correct = self.true_positive() as u128 + self.true_negative() as u128;
        Ratio::of_counts(correct, self.total() as u128)
    }

    pub fn precision(&self) -> Ratio {
        let tp = self.true_positive() as u128;
        Ratio::of_counts(tp, tp + self.false_positive() as u128)
    }

    /// Harmonic mean of precision and sensitivity, combining their fallback
    /// values when either is undefined.
    pub fn f_score(&self) -> Ratio {
        let p = self.precision().value();
        let s = self.sensitivity().value();
        let denom = p + s;
        if denom == 0.0 {
            return Ratio::undefined();
        }
        Ratio {
            value: 2.0 * (p * s) / denom,
            defined: true,
        }
    }

    pub fn metric(&self, metric: Metric) -> Ratio {
        match metric {
            Metric::Sensitivity => self.sensitivity(),
            Metric::Specificity => self.specificity(),
            Metric::Accuracy => self.accuracy(),
            Metric::Precision => self.precision(),
            Metric::FScore => self.f_score(),
        }
    }

    pub fn compute_all(&self) -> MetricSet {
        let order = *metric_order();
        MetricSet {
            entries: order.map(|m| (m, self.metric(m))),
        }
    }
}

/// All five metrics of one matrix, always iterated in `metric_order()`.
/// Entry `i` holds the metric whose discriminant is `i`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricSet {
    entries: [(Metric, Ratio); 5],
}

impl MetricSet {
    pub fn get(&self, metric: Metric) -> Ratio {
        self.entries[metric as usize].1
    }

    pub fn iter(&self) -> impl Iterator<Item = (Metric, Ratio)> + '_ {
        self.entries.iter().copied()
    }

    pub fn undefined(&self) -> Vec<Metric> {
        self.iter()
            .filter(|(_, r)| r.strict().is_none())
            .map(|(m, _)| m)
            .collect()
    }
}

impl Serialize for MetricSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (metric, ratio) in &self.entries {
            map.serialize_entry(metric.key(), ratio)?;
        }
        map.end()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/metrics.rs"]
mod tests;
