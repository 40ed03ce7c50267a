//! Density-independent units and pixel rounding rules for Cranpose
//!
//! Platform metrics are authored in dp and converted to whole device pixels
//! with one of a few historical rounding rules. Every rule lives here so the
//! view configuration resolver and the resource tables agree bit for bit.

mod unit;

pub use unit::*;

pub mod prelude {
    pub use crate::unit::{Density, Dp, Px};
}
