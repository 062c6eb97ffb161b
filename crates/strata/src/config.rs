//! Layout tuning constants.
//!
//! The defaults reproduce the classic TurboFan graph view: 50px input ports, 20px lanes between
//! parallel lines and 130px between rows.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Width of one input port, which is also the width of one occupancy slot.
    pub input_width: f64,
    /// Minimum distance between parallel edge lines, and the padding around a node.
    pub min_edge_separation: f64,
    /// Shortest vertical run of an output line before it turns.
    pub min_output_approach: f64,
    /// Radius of the input/output port bubbles drawn above and below a node.
    pub bubble_radius: f64,
    /// Vertical gap between consecutive rows.
    pub row_separation: f64,
    /// Padding added on every side of the final bounding box.
    pub margin: f64,
    pub arrowhead_height: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            input_width: 50.0,
            min_edge_separation: 20.0,
            min_output_approach: 15.0,
            bubble_radius: 12.0,
            row_separation: 130.0,
            margin: 50.0,
            arrowhead_height: 7.0,
        }
    }
}

impl LayoutConfig {
    /// Shortest vertical run of an input line above the input bubbles.
    pub fn min_input_approach(&self) -> f64 {
        self.min_output_approach + 2.0 * self.bubble_radius
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.input_width.is_finite() && self.input_width > 0.0) {
            return Err(Error::InvalidConfig {
                message: format!("inputWidth must be positive, got {}", self.input_width),
            });
        }
        let non_negative = [
            ("minEdgeSeparation", self.min_edge_separation),
            ("minOutputApproach", self.min_output_approach),
            ("bubbleRadius", self.bubble_radius),
            ("rowSeparation", self.row_separation),
            ("margin", self.margin),
            ("arrowheadHeight", self.arrowhead_height),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(Error::InvalidConfig {
                    message: format!("{name} must be a non-negative number, got {value}"),
                });
            }
        }
        Ok(())
    }
}
