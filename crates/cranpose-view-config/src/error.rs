use crate::LookupError;

/// Errors produced while resolving a view configuration.
///
/// Resolution is all-or-nothing: an error never comes with a partial
/// configuration, and retrying with the same inputs fails the same way.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResolveError {
    #[error("invalid input: density must be finite and greater than zero, got {density}")]
    InvalidDensity { density: f32 },

    #[error("invalid input: display dimensions must be non-negative, got {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error(transparent)]
    Lookup(#[from] LookupError),
}

impl ResolveError {
    /// True for precondition violations on the caller-supplied metrics.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            ResolveError::InvalidDensity { .. } | ResolveError::InvalidDimensions { .. }
        )
    }
}
