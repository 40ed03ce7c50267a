//! Testing utilities and fixtures for cranpose-view-config

pub mod assertions;
pub mod env;
pub mod lookup;

pub use assertions::*;
pub use env::*;
pub use lookup::*;

pub mod prelude {
    pub use crate::assertions::*;
    pub use crate::env::{init_logging, with_env_var};
    pub use crate::lookup::{stock_base_constants, FailingLookup, RecordingLookup};
}
