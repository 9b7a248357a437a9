//! Result types for truss analysis

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::elements::Id;

/// Displacement results at a node
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodeDisplacement {
    /// Displacement in X direction
    pub dx: f64,
    /// Displacement in Y direction
    pub dy: f64,
}

impl NodeDisplacement {
    /// Euclidean displacement magnitude
    pub fn magnitude(&self) -> f64 {
        self.dx.hypot(self.dy)
    }
}

/// Constraint force recovered at a node.
///
/// Reported for every node, restrained or not. At restrained DOFs this is the
/// support reaction; at free DOFs it is the equilibrium residual `K·d − f`,
/// expected to be near zero and useful only as a consistency diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reaction {
    /// Reaction force in X direction
    pub rx: f64,
    /// Reaction force in Y direction
    pub ry: f64,
}

impl Reaction {
    /// Euclidean force magnitude
    pub fn magnitude(&self) -> f64 {
        self.rx.hypot(self.ry)
    }
}

/// Axial force in a member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberForce {
    /// Member identifier
    pub member: Id,
    /// Axial force (positive = tension)
    pub axial: f64,
}

/// Full output of one analysis pass, keyed by caller identifiers
#[derive(Debug, Clone)]
pub struct AnalysisResults {
    /// Displacements per node
    pub displacements: HashMap<Id, NodeDisplacement>,
    /// Reactions per node (see [`Reaction`] for free-DOF semantics)
    pub reactions: HashMap<Id, Reaction>,
    /// Member axial forces, in input order
    pub member_forces: Vec<MemberForce>,
    /// Largest nodal displacement magnitude
    pub max_displacement: f64,
}

impl AnalysisResults {
    /// Get the displacement of a node
    pub fn displacement(&self, id: &Id) -> Option<NodeDisplacement> {
        self.displacements.get(id).copied()
    }

    /// Get the reaction at a node
    pub fn reaction(&self, id: &Id) -> Option<Reaction> {
        self.reactions.get(id).copied()
    }

    /// Get the axial force in a member
    pub fn member_force(&self, id: &Id) -> Option<f64> {
        self.member_forces
            .iter()
            .find(|f| &f.member == id)
            .map(|f| f.axial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_displacement_magnitude() {
        let disp = NodeDisplacement { dx: 3.0e-4, dy: 4.0e-4 };
        assert_relative_eq!(disp.magnitude(), 5.0e-4, epsilon = 1e-12);
    }

    #[test]
    fn test_member_force_lookup() {
        let results = AnalysisResults {
            displacements: HashMap::new(),
            reactions: HashMap::new(),
            member_forces: vec![MemberForce {
                member: Id::from("1-2"),
                axial: 1000.0,
            }],
            max_displacement: 0.0,
        };
        assert_eq!(results.member_force(&Id::from("1-2")), Some(1000.0));
        assert_eq!(results.member_force(&Id::from("2-3")), None);
    }
}
