//! View configuration for Cranpose
//!
//! Turns a display snapshot (density, pixel size, screen layout size, API
//! level) plus the platform's base constants into the gesture and rendering
//! thresholds the UI toolkit calibrates against: touch slop, fling velocity
//! limits, fading edge length, scrollbar size, overfling distance and so on.
//!
//! Resolution is a pure computation. The platform resource table is reached
//! through [`LookupService`], and the one piece of process-wide mutable
//! state, the permanent menu key override, lives in [`MenuKeyState`].

mod api_level;
mod context;
mod error;
mod lookup;
mod menu_key;
mod metrics;
mod options;
mod profile;
mod resolver;
mod resources;

pub use api_level::*;
pub use context::*;
pub use error::*;
pub use lookup::*;
pub use menu_key::*;
pub use metrics::*;
pub use options::*;
pub use profile::*;
pub use resolver::*;
pub use resources::*;

pub mod prelude {
    pub use crate::api_level::ApiLevel;
    pub use crate::context::{Configuration, DisplayMetrics, ScreenLayoutSize};
    pub use crate::lookup::LookupService;
    pub use crate::metrics::{BaseConstants, MetricsInput};
    pub use crate::options::{MinScalingSpanPolicy, ResolverOptions};
    pub use crate::profile::DeviceProfile;
    pub use crate::resolver::{ResolvedConfig, Resolver};
    pub use cranpose_ui_unit::Density;
}
