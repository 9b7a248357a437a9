//! Node element - a joint in the truss

use serde::{Deserialize, Serialize};

use crate::elements::{Id, Support};
use crate::loads::NodeLoad;

/// A 2D joint in the truss model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// Caller-supplied identifier, unique within a model
    pub id: Id,
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
    /// Support restraints at this joint
    #[serde(default)]
    pub support: Support,
    /// Applied load at this joint
    #[serde(default)]
    pub load: NodeLoad,
}

impl Node {
    /// Create a free, unloaded node at the given coordinates
    pub fn new(id: impl Into<Id>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            support: Support::free(),
            load: NodeLoad::none(),
        }
    }

    /// Set the support restraints
    pub fn with_support(mut self, support: Support) -> Self {
        self.support = support;
        self
    }

    /// Set the applied load
    pub fn with_load(mut self, load: NodeLoad) -> Self {
        self.load = load;
        self
    }

    /// Get the coordinates as an array
    pub fn coords(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Calculate distance to another node
    pub fn distance_to(&self, other: &Node) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}
