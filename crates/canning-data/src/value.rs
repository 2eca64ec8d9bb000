//! Sentinel-aware metric values.
//!
//! The snapshot feed marks "not applicable" metrics with the literal `-999`
//! and leaves unknown metrics out entirely (or sends `null`). Both mean the
//! metric must be excluded from peer comparison. [`FeedValue`] keeps the
//! distinction so records serialize back exactly as they arrived, while
//! [`FeedValue::resolve`] collapses both into `None` for the engine.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Sentinel used by the feed for "not applicable".
pub const NOT_APPLICABLE: f64 = -999.0;

/// A raw metric value as delivered by the snapshot feed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FeedValue {
    /// A reported numeric value. May still be non-finite.
    Reported(f64),
    /// The feed sent the `-999` sentinel.
    NotApplicable,
    /// The field was missing or `null`.
    #[default]
    Absent,
}

impl FeedValue {
    /// Classify a raw feed value.
    ///
    /// # Examples
    ///
    /// ```
    /// use canning_data::FeedValue;
    ///
    /// assert_eq!(FeedValue::from_raw(None), FeedValue::Absent);
    /// assert_eq!(FeedValue::from_raw(Some(-999.0)), FeedValue::NotApplicable);
    /// assert_eq!(FeedValue::from_raw(Some(0.0)), FeedValue::Reported(0.0));
    /// ```
    pub fn from_raw(raw: Option<f64>) -> Self {
        match raw {
            None => Self::Absent,
            Some(v) if v == NOT_APPLICABLE => Self::NotApplicable,
            Some(v) => Self::Reported(v),
        }
    }

    /// Resolve to a usable value, or `None` when the metric is missing.
    ///
    /// Absent fields, the sentinel, and non-finite numbers all resolve to
    /// `None`. A reported zero stays `Some(0.0)`.
    pub const fn resolve(self) -> Option<f64> {
        match self {
            Self::Reported(v) if v.is_finite() => Some(v),
            _ => None,
        }
    }

    /// Translate back to the feed representation.
    pub const fn to_raw(self) -> Option<f64> {
        match self {
            Self::Reported(v) => Some(v),
            Self::NotApplicable => Some(NOT_APPLICABLE),
            Self::Absent => None,
        }
    }

    /// Whether the field was missing from the feed.
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Whether the value resolves to `None`.
    pub const fn is_missing(&self) -> bool {
        self.resolve().is_none()
    }
}

impl From<f64> for FeedValue {
    fn from(value: f64) -> Self {
        Self::from_raw(Some(value))
    }
}

impl From<Option<f64>> for FeedValue {
    fn from(value: Option<f64>) -> Self {
        Self::from_raw(value)
    }
}

impl Serialize for FeedValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_raw().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FeedValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<f64>::deserialize(deserializer).map(Self::from_raw)
    }
}
