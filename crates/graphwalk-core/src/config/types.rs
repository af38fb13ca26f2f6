//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::graph::{Preset, PresetParams};
use crate::traversal::Algorithm;

/// graphwalk configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkConfig {
    /// Algorithm used when none is given on the command line
    #[serde(default)]
    pub algorithm: Algorithm,

    /// Default graph source
    #[serde(default)]
    pub graph: GraphConfig,
}

/// Default preset graph and its size parameters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    #[serde(default)]
    pub preset: Preset,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cols: Option<usize>,
}

impl GraphConfig {
    pub fn params(&self) -> PresetParams {
        PresetParams {
            size: self.size,
            rows: self.rows,
            cols: self.cols,
        }
    }
}
