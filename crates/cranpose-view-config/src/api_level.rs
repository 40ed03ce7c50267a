//! Platform API levels and the version gates the resolver branches on.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Monotonically increasing platform version number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ApiLevel(pub u32);

impl ApiLevel {
    /// Scrollbar size became a pixel resource instead of a dp constant.
    pub const P: ApiLevel = ApiLevel(28);
    /// Min scaling span became a resource and configurations started
    /// recording that they were built from a context.
    pub const Q: ApiLevel = ApiLevel(29);

    pub fn is_at_least(self, gate: ApiLevel) -> bool {
        self >= gate
    }
}

impl fmt::Display for ApiLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
