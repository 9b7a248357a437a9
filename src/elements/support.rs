//! Support conditions

use serde::{Deserialize, Serialize};

/// Translational restraints at a node, per global axis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Support {
    /// Restrained in X translation
    pub x: bool,
    /// Restrained in Y translation
    pub y: bool,
}

impl Support {
    /// Create a support with no restraints
    pub fn free() -> Self {
        Self::default()
    }

    /// Create a fully fixed support (both axes restrained)
    pub fn fixed() -> Self {
        Self { x: true, y: true }
    }

    /// Create a roller that restrains X translation only
    pub fn roller_x() -> Self {
        Self { x: true, y: false }
    }

    /// Create a roller that restrains Y translation only
    pub fn roller_y() -> Self {
        Self { x: false, y: true }
    }

    /// Create a support with specific restraints
    pub fn with_restraints(x: bool, y: bool) -> Self {
        Self { x, y }
    }

    /// Check if any axis is restrained
    pub fn is_supported(&self) -> bool {
        self.x || self.y
    }

    /// Count of restrained axes
    pub fn num_restrained(&self) -> usize {
        usize::from(self.x) + usize::from(self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_support() {
        let support = Support::fixed();
        assert!(support.x && support.y);
        assert_eq!(support.num_restrained(), 2);
    }

    #[test]
    fn test_rollers() {
        assert!(Support::roller_x().x && !Support::roller_x().y);
        assert!(!Support::roller_y().x && Support::roller_y().y);
        assert_eq!(Support::roller_y().num_restrained(), 1);
    }

    #[test]
    fn test_free_support() {
        assert!(!Support::free().is_supported());
    }
}
