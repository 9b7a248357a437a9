//! Truss Solver - linear-elastic analysis of 2D pin-jointed trusses
//!
//! This library implements the direct stiffness method for planar trusses:
//! given joint positions, per-axis support restraints, applied joint loads,
//! and member section/material properties, it computes nodal displacements,
//! support reactions, member axial forces, and the maximum nodal displacement
//! magnitude.
//!
//! The engine is a single synchronous pass with no state between calls:
//! assemble the global stiffness matrix, partition degrees of freedom into
//! free and restrained sets, solve the reduced system by Gaussian elimination
//! with partial pivoting, then recover reactions and member forces. Inputs
//! are expected in consistent units; no unit conversion is performed.
//!
//! ## Example
//! ```rust
//! use truss_solver::prelude::*;
//!
//! // A 1 m bar fixed at one end, guided at the other, pulled axially
//! let nodes = vec![
//!     Node::new(1, 0.0, 0.0).with_support(Support::fixed()),
//!     Node::new(2, 1.0, 0.0)
//!         .with_support(Support::roller_y())
//!         .with_load(NodeLoad::fx(1000.0)),
//! ];
//! let members = vec![Member::new("1-2", 1, 2, 0.01, 2.0e11)];
//!
//! let results = compute(nodes, members).unwrap();
//!
//! // Tip displacement F·L/(A·E) = 5e-7 m
//! let tip = results.displacement(&Id::from(2)).unwrap();
//! assert!((tip.dx - 5.0e-7).abs() < 1e-12);
//! ```

pub mod elements;
pub mod error;
pub mod io;
pub mod loads;
pub mod math;
pub mod model;
pub mod results;

// Re-export common types
pub mod prelude {
    pub use crate::elements::{Id, Member, Node, Support};
    pub use crate::error::{TrussError, TrussResult};
    pub use crate::io::TrussDocument;
    pub use crate::loads::NodeLoad;
    pub use crate::model::{compute, TrussModel};
    pub use crate::results::{AnalysisResults, MemberForce, NodeDisplacement, Reaction};
}
