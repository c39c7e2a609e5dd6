use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Closed set of chart presentations an element can declare.
///
/// The kind is fixed when a binding is created and never changes for the
/// element's lifetime. Hosts name kinds by hook name (`RevenueChart`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartKind {
    /// Currency bars per category.
    Categorical,
    /// Percentage bars on a fixed 0..=100 axis.
    BoundedPercentage,
    /// Currency over time as a filled, smoothed line.
    Trend,
}

impl ChartKind {
    pub const ALL: [Self; 3] = [Self::Categorical, Self::BoundedPercentage, Self::Trend];

    #[must_use]
    pub const fn hook_name(self) -> &'static str {
        match self {
            Self::Categorical => "RevenueChart",
            Self::BoundedPercentage => "UtilizationChart",
            Self::Trend => "TrendChart",
        }
    }

    pub fn from_hook_name(name: &str) -> ChartResult<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.hook_name() == name)
            .ok_or_else(|| ChartError::InvalidData(format!("unknown chart hook `{name}`")))
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hook_name())
    }
}

impl FromStr for ChartKind {
    type Err = ChartError;

    fn from_str(s: &str) -> ChartResult<Self> {
        Self::from_hook_name(s)
    }
}

/// Drawing geometry used by a presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Geometry {
    Bar,
    Line,
}
