//! Lookup fakes.

use std::sync::Mutex;

use cranpose_view_config::{ApiLevel, BaseConstants, LookupError, LookupService};

/// Answers with fixed constants and records every API level it was asked
/// about.
#[derive(Debug, Default)]
pub struct RecordingLookup {
    constants: BaseConstants,
    requests: Mutex<Vec<ApiLevel>>,
}

impl RecordingLookup {
    pub fn new(constants: BaseConstants) -> Self {
        Self {
            constants,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<ApiLevel> {
        self.requests.lock().expect("requests lock poisoned").clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().expect("requests lock poisoned").len()
    }
}

impl LookupService for RecordingLookup {
    fn base_constants(&self, api_level: ApiLevel) -> Result<BaseConstants, LookupError> {
        self.requests
            .lock()
            .expect("requests lock poisoned")
            .push(api_level);
        Ok(self.constants)
    }
}

/// Always fails with the configured reason.
#[derive(Clone, Debug)]
pub struct FailingLookup {
    reason: String,
}

impl FailingLookup {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl LookupService for FailingLookup {
    fn base_constants(&self, api_level: ApiLevel) -> Result<BaseConstants, LookupError> {
        Err(LookupError::new(api_level, self.reason.clone()))
    }
}

/// Stock base constants with a configurable scrollbar size and span.
pub fn stock_base_constants(scrollbar_size: i32, min_scaling_span: i32) -> BaseConstants {
    BaseConstants {
        edge_slop: 12,
        fading_edge_length: 12,
        minimum_fling_velocity: 50,
        maximum_fling_velocity: 8000,
        scrollbar_size,
        overfling_distance: 6,
        min_scaling_span,
        fading_marquee_enabled: true,
    }
}
