//! Node loads - forces applied directly to joints

use serde::{Deserialize, Serialize};

/// A force applied directly to a node, in global axes
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeLoad {
    /// Force in X direction (N)
    pub fx: f64,
    /// Force in Y direction (N)
    pub fy: f64,
}

impl NodeLoad {
    /// Create a load with both components
    pub fn force(fx: f64, fy: f64) -> Self {
        Self { fx, fy }
    }

    /// Create a zero load
    pub fn none() -> Self {
        Self::default()
    }

    /// Create a load in X direction
    pub fn fx(value: f64) -> Self {
        Self::force(value, 0.0)
    }

    /// Create a load in Y direction
    pub fn fy(value: f64) -> Self {
        Self::force(0.0, value)
    }

    /// Get the load as an array [FX, FY]
    pub fn as_array(&self) -> [f64; 2] {
        [self.fx, self.fy]
    }

    /// Scale the load by a factor
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            fx: self.fx * factor,
            fy: self.fy * factor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorthands() {
        assert_eq!(NodeLoad::fx(10.0), NodeLoad::force(10.0, 0.0));
        assert_eq!(NodeLoad::fy(-5.0), NodeLoad::force(0.0, -5.0));
        assert_eq!(NodeLoad::none().as_array(), [0.0, 0.0]);
    }

    #[test]
    fn test_scaled() {
        let load = NodeLoad::force(3.0, -4.0).scaled(2.0);
        assert_eq!(load.as_array(), [6.0, -8.0]);
    }
}
