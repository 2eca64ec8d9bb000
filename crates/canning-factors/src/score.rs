//! Shared scoring traits and the weighted combination rule.

use crate::metric::Metric;
use crate::percentile::MetricPercentiles;
use serde::{Deserialize, Serialize};

/// How a weighted combination treats components that have no value.
///
/// This is a scoring policy, not a derived fact, so it is configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingPolicy {
    /// Renormalize weights over the components that are present. A missing
    /// component then contributes nothing and does not drag the score down.
    #[default]
    Reweight,
    /// Keep the configured weights; a missing component contributes 0.
    Zero,
}

/// Weighted mean of optional components.
///
/// Components with a non-positive weight are ignored. Returns `None` when no
/// positively weighted component has a value.
///
/// # Examples
///
/// ```
/// use canning_factors::{MissingPolicy, combine};
///
/// let parts = [(Some(90.0), 1.0), (None, 1.0), (Some(30.0), 1.0)];
/// assert_eq!(combine(parts, MissingPolicy::Reweight), Some(60.0));
/// assert_eq!(combine(parts, MissingPolicy::Zero), Some(40.0));
/// assert_eq!(combine([(None, 1.0)], MissingPolicy::Reweight), None);
/// ```
pub fn combine<I>(parts: I, policy: MissingPolicy) -> Option<f64>
where
    I: IntoIterator<Item = (Option<f64>, f64)>,
{
    let mut total_weight = 0.0;
    let mut present_weight = 0.0;
    let mut weighted_sum = 0.0;

    for (value, weight) in parts {
        if weight <= 0.0 {
            continue;
        }
        total_weight += weight;
        if let Some(v) = value {
            weighted_sum += v * weight;
            present_weight += weight;
        }
    }

    if present_weight <= 0.0 {
        return None;
    }

    match policy {
        MissingPolicy::Reweight => Some(weighted_sum / present_weight),
        MissingPolicy::Zero => Some(weighted_sum / total_weight),
    }
}

/// A sub-score built from weighted metric percentiles.
pub trait SubScore {
    /// Name of the sub-score.
    fn name(&self) -> &str;

    /// Metrics and their weights.
    fn components(&self) -> Vec<(Metric, f64)>;

    /// Metrics that carry a positive weight.
    fn required_metrics(&self) -> Vec<Metric> {
        self.components()
            .into_iter()
            .filter(|(_, w)| *w > 0.0)
            .map(|(m, _)| m)
            .collect()
    }

    /// Score a company from its percentiles, on the 0-100 scale.
    fn score(&self, percentiles: &MetricPercentiles, policy: MissingPolicy) -> Option<f64> {
        combine(
            self.components()
                .into_iter()
                .map(|(m, w)| (percentiles.get(m), w)),
            policy,
        )
    }
}

/// A scorer constructed from a configuration struct.
pub trait Configurable: Sized {
    /// Configuration type.
    type Config;

    /// Create the scorer from a configuration.
    fn with_config(config: Self::Config) -> Self;

    /// Current configuration.
    fn config(&self) -> &Self::Config;
}
