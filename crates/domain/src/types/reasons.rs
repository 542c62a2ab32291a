//! Reasons an inflation comparison could not be produced
//!
//! These are expected outcomes of incomplete user data, not failures. They
//! are returned inside result structures so the caller can render the
//! matching message.

use serde::{Deserialize, Serialize};

use crate::constants::GENERIC_UNAVAILABLE_MESSAGE;
use crate::impl_domain_code_conversions;

/// Why an inflation projection or comparison is not ready
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnavailableReason {
    NoRegularSalary,
    NoInflationData,
    MissingBaselineIndex,
    MissingSeriesData,
    NoSourceSelected,
    ManualBaselineUnset,
    ManualBaselineInvalid,
    MissingTimeline,
}

impl_domain_code_conversions!(UnavailableReason {
    NoRegularSalary => "no-regular-salary",
    NoInflationData => "no-inflation-data",
    MissingBaselineIndex => "missing-baseline-index",
    MissingSeriesData => "missing-series-data",
    NoSourceSelected => "no-source-selected",
    ManualBaselineUnset => "manual-baseline-unset",
    ManualBaselineInvalid => "manual-baseline-invalid",
    MissingTimeline => "missing-timeline",
});

impl UnavailableReason {
    /// User-facing explanation for this reason.
    pub const fn message(&self) -> &'static str {
        match self {
            Self::NoRegularSalary => "Add a regular salary entry to see the projection.",
            Self::NoInflationData => "Download inflation data in Settings to compare.",
            Self::MissingBaselineIndex => "Inflation data missing for the first salary month.",
            Self::MissingSeriesData => "Inflation data missing for part of this period.",
            Self::NoSourceSelected => {
                "Select an inflation source in Settings to enable this comparison."
            }
            Self::ManualBaselineUnset => "Select an inflation baseline entry in the salary table.",
            Self::ManualBaselineInvalid => {
                "The selected manual inflation baseline is no longer available."
            }
            Self::MissingTimeline => GENERIC_UNAVAILABLE_MESSAGE,
        }
    }
}

/// Sign of actual pay minus inflation-adjusted pay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeltaState {
    Gain,
    Loss,
    Even,
}

impl_domain_code_conversions!(DeltaState {
    Gain => "gain",
    Loss => "loss",
    Even => "even",
});

impl DeltaState {
    /// Classify a delta by its sign.
    pub fn from_delta(delta: rust_decimal::Decimal) -> Self {
        if delta.is_sign_positive() && !delta.is_zero() {
            Self::Gain
        } else if delta.is_sign_negative() && !delta.is_zero() {
            Self::Loss
        } else {
            Self::Even
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn reason_codes_serialize_kebab_case() {
        let json = serde_json::to_string(&UnavailableReason::ManualBaselineUnset).unwrap();
        assert_eq!(json, "\"manual-baseline-unset\"");
        assert_eq!(UnavailableReason::MissingSeriesData.to_string(), "missing-series-data");
    }

    #[test]
    fn source_message_matches_settings_hint() {
        assert_eq!(
            UnavailableReason::NoSourceSelected.message(),
            "Select an inflation source in Settings to enable this comparison."
        );
        assert_eq!(UnavailableReason::MissingTimeline.message(), GENERIC_UNAVAILABLE_MESSAGE);
    }

    #[test]
    fn delta_state_follows_sign() {
        assert_eq!(DeltaState::from_delta(Decimal::new(1, 2)), DeltaState::Gain);
        assert_eq!(DeltaState::from_delta(Decimal::new(-1, 2)), DeltaState::Loss);
        assert_eq!(DeltaState::from_delta(Decimal::ZERO), DeltaState::Even);
        assert_eq!(DeltaState::from_delta(-Decimal::new(0, 2)), DeltaState::Even);
    }
}
