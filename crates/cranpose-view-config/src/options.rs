//! Resolver configuration switches.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Environment variable consulted by [`ResolverOptions::from_env`].
pub const USE_REAL_MIN_SCALING_SPAN_ENV: &str = "CRANPOSE_USE_REAL_MIN_SCALING_SPAN";

/// Where the minimum scaling span comes from on API levels that have one.
///
/// Older builds always reported a span of 0. Pinch gestures recorded against
/// that value behave differently once the real span is applied, so
/// `LegacyZero` keeps reproducing the old answer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum MinScalingSpanPolicy {
    /// Use the span reported by the platform resource table.
    #[default]
    RealPlatformValue,
    /// Always report 0.
    LegacyZero,
}

impl MinScalingSpanPolicy {
    pub fn from_flag(use_real_min_scaling_span: bool) -> Self {
        if use_real_min_scaling_span {
            Self::RealPlatformValue
        } else {
            Self::LegacyZero
        }
    }

    pub fn uses_real_value(self) -> bool {
        matches!(self, Self::RealPlatformValue)
    }
}

/// Options applied to every resolution performed by a [`Resolver`].
///
/// [`Resolver`]: crate::Resolver
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ResolverOptions {
    pub min_scaling_span: MinScalingSpanPolicy,
}

impl ResolverOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_scaling_span(mut self, policy: MinScalingSpanPolicy) -> Self {
        self.min_scaling_span = policy;
        self
    }

    /// Reads the options from the process environment.
    ///
    /// An unset variable keeps the default (real platform value).
    pub fn from_env() -> Self {
        let value = std::env::var(USE_REAL_MIN_SCALING_SPAN_ENV).ok();
        Self::from_env_value(value.as_deref())
    }

    /// Interprets a raw value of [`USE_REAL_MIN_SCALING_SPAN_ENV`].
    ///
    /// Only a case-insensitive `true` enables the real span, mirroring how
    /// boolean system properties are parsed; any other present value selects
    /// the legacy zero.
    pub fn from_env_value(value: Option<&str>) -> Self {
        let use_real = match value {
            None => true,
            Some(raw) => raw.eq_ignore_ascii_case("true"),
        };
        if !use_real {
            log::debug!(
                "{USE_REAL_MIN_SCALING_SPAN_ENV}={value:?}: using legacy zero min scaling span"
            );
        }
        Self::default().with_min_scaling_span(MinScalingSpanPolicy::from_flag(use_real))
    }
}

#[cfg(test)]
#[path = "tests/options_tests.rs"]
mod tests;
