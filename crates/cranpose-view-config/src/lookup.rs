//! Lookup seam for the platform's version-dependent base constants.

use std::rc::Rc;
use std::sync::Arc;

use crate::{ApiLevel, BaseConstants};

/// The platform resource table could not supply base constants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("base constants unavailable for API level {api_level}: {reason}")]
pub struct LookupError {
    pub api_level: ApiLevel,
    pub reason: String,
}

impl LookupError {
    pub fn new(api_level: ApiLevel, reason: impl Into<String>) -> Self {
        Self {
            api_level,
            reason: reason.into(),
        }
    }
}

/// Supplies the unscaled base constants for a platform version.
///
/// The resolver treats the answer as authoritative: values are neither
/// cached nor sanitized. `scrollbar_size` is expected in dp below
/// [`ApiLevel::P`] and already in pixels from then on; `min_scaling_span`
/// is only read from [`ApiLevel::Q`] on.
pub trait LookupService {
    fn base_constants(&self, api_level: ApiLevel) -> Result<BaseConstants, LookupError>;
}

impl<T: LookupService + ?Sized> LookupService for &T {
    fn base_constants(&self, api_level: ApiLevel) -> Result<BaseConstants, LookupError> {
        (**self).base_constants(api_level)
    }
}

impl<T: LookupService + ?Sized> LookupService for Box<T> {
    fn base_constants(&self, api_level: ApiLevel) -> Result<BaseConstants, LookupError> {
        (**self).base_constants(api_level)
    }
}

impl<T: LookupService + ?Sized> LookupService for Rc<T> {
    fn base_constants(&self, api_level: ApiLevel) -> Result<BaseConstants, LookupError> {
        (**self).base_constants(api_level)
    }
}

impl<T: LookupService + ?Sized> LookupService for Arc<T> {
    fn base_constants(&self, api_level: ApiLevel) -> Result<BaseConstants, LookupError> {
        (**self).base_constants(api_level)
    }
}
