//! Truss model - validated structural model and analysis pipeline

use std::collections::HashMap;

use log::debug;

use crate::elements::{Id, Member, Node};
use crate::error::{TrussError, TrussResult};
use crate::math::{self, Mat, Vec as FEVec};
use crate::results::{AnalysisResults, MemberForce, NodeDisplacement, Reaction};

/// A validated 2D pin-jointed truss model.
///
/// Construction is the single validation point: coordinates, loads, section
/// properties, member topology, and member lengths are checked once, and the
/// analysis pipeline relies on those invariants without re-deriving them.
///
/// Node input order is load-bearing: the node at position `i` owns global
/// DOFs `2i` (x) and `2i + 1` (y), and results map back to caller identifiers
/// through the same ordering.
#[derive(Debug, Clone)]
pub struct TrussModel {
    nodes: Vec<Node>,
    members: Vec<Member>,
    /// Node id → ordinal in input order
    index: HashMap<Id, usize>,
}

impl TrussModel {
    /// Validate raw nodes and members into an analyzable model.
    ///
    /// Duplicate node identifiers are rejected rather than letting a later
    /// node overwrite an earlier one.
    pub fn new(nodes: Vec<Node>, members: Vec<Member>) -> TrussResult<Self> {
        let mut index = HashMap::with_capacity(nodes.len());

        for (ordinal, node) in nodes.iter().enumerate() {
            ensure_finite(node.x, || format!("x coordinate of node '{}'", node.id))?;
            ensure_finite(node.y, || format!("y coordinate of node '{}'", node.id))?;
            ensure_finite(node.load.fx, || format!("load fx of node '{}'", node.id))?;
            ensure_finite(node.load.fy, || format!("load fy of node '{}'", node.id))?;

            if index.insert(node.id.clone(), ordinal).is_some() {
                return Err(TrussError::DuplicateNode(node.id.clone()));
            }
        }

        for member in &members {
            ensure_finite(member.area, || format!("area of member '{}'", member.id))?;
            ensure_finite(member.elastic_modulus, || {
                format!("elastic modulus of member '{}'", member.id)
            })?;

            let from = resolve(&index, &member.id, &member.from)?;
            let to = resolve(&index, &member.id, &member.to)?;

            let (ni, nj) = (&nodes[from], &nodes[to]);
            if math::axial_geometry(nj.x - ni.x, nj.y - ni.y, member.area, member.elastic_modulus)
                .is_none()
            {
                return Err(TrussError::ZeroLengthMember(member.id.clone()));
            }
        }

        Ok(Self {
            nodes,
            members,
            index,
        })
    }

    /// Nodes in input order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Members in input order
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Total number of degrees of freedom (two per node)
    pub fn dof_count(&self) -> usize {
        self.nodes.len() * 2
    }

    // ========================
    // Analysis
    // ========================

    /// Run the linear static analysis.
    ///
    /// One deterministic forward pass: assemble, partition, solve the reduced
    /// free-DOF system, then recover reactions and member forces. The model
    /// is not mutated and no state survives the call.
    pub fn analyze(&self) -> TrussResult<AnalysisResults> {
        let k_global = self.assemble_stiffness();
        let loads = self.build_load_vector();
        let (free_dofs, restrained_dofs) = self.partition_dofs();

        debug!(
            "analyzing {} nodes, {} members: {} free / {} restrained DOFs",
            self.nodes.len(),
            self.members.len(),
            free_dofs.len(),
            restrained_dofs.len()
        );

        if free_dofs.is_empty() {
            return Err(TrussError::NoFreeDofs);
        }

        // Reduce to the free-DOF system
        let n_free = free_dofs.len();
        let mut k_ff = Mat::zeros(n_free, n_free);
        let mut p_f = FEVec::zeros(n_free);

        for (i, &di) in free_dofs.iter().enumerate() {
            p_f[i] = loads[di];
            for (j, &dj) in free_dofs.iter().enumerate() {
                k_ff[(i, j)] = k_global[(di, dj)];
            }
        }

        let d_f = math::solve_gaussian(&k_ff, &p_f).ok_or(TrussError::SingularMatrix)?;

        // Scatter into the full displacement vector; restrained DOFs stay
        // exactly zero (no support settlement is modeled)
        let mut d_full = FEVec::zeros(self.dof_count());
        for (i, &dof) in free_dofs.iter().enumerate() {
            d_full[dof] = d_f[i];
        }

        // Reactions for every DOF: K·d − f. At free DOFs this is the
        // equilibrium residual rather than a physical support force.
        let reactions = &k_global * &d_full - &loads;

        let member_forces = self.member_forces(&d_full);

        debug!("reduced {n_free}x{n_free} system solved");

        Ok(self.collect_results(&d_full, &reactions, member_forces))
    }

    /// Assemble the dense global stiffness matrix.
    ///
    /// Each member's 4x4 block is accumulated into the global matrix,
    /// never overwritten: multiple members may share a DOF pair.
    fn assemble_stiffness(&self) -> Mat {
        let n_dofs = self.dof_count();
        let mut k_global = Mat::zeros(n_dofs, n_dofs);

        for member in &self.members {
            let (i, j) = self.member_ordinals(member);
            let k_member = math::member_global_stiffness(&self.member_geometry(member));

            let dof_map = [2 * i, 2 * i + 1, 2 * j, 2 * j + 1];
            for (row, &global_row) in dof_map.iter().enumerate() {
                for (col, &global_col) in dof_map.iter().enumerate() {
                    k_global[(global_row, global_col)] += k_member[(row, col)];
                }
            }
        }

        k_global
    }

    /// Gather applied joint loads into the global force vector
    fn build_load_vector(&self) -> FEVec {
        let mut p = FEVec::zeros(self.dof_count());
        for (ordinal, node) in self.nodes.iter().enumerate() {
            p[2 * ordinal] = node.load.fx;
            p[2 * ordinal + 1] = node.load.fy;
        }
        p
    }

    /// Classify every DOF as free or restrained.
    ///
    /// Nodes are scanned in input order, x axis then y axis, so both lists
    /// come out in ascending DOF order.
    fn partition_dofs(&self) -> (Vec<usize>, Vec<usize>) {
        let mut free = Vec::new();
        let mut restrained = Vec::new();

        for (ordinal, node) in self.nodes.iter().enumerate() {
            if node.support.x {
                restrained.push(2 * ordinal);
            } else {
                free.push(2 * ordinal);
            }
            if node.support.y {
                restrained.push(2 * ordinal + 1);
            } else {
                free.push(2 * ordinal + 1);
            }
        }

        (free, restrained)
    }

    /// Axial force per member, tension positive.
    ///
    /// Direction cosines and stiffness are recomputed from the undeformed
    /// geometry, identically to assembly.
    fn member_forces(&self, d_full: &FEVec) -> Vec<MemberForce> {
        self.members
            .iter()
            .map(|member| {
                let (i, j) = self.member_ordinals(member);
                let geom = self.member_geometry(member);

                let elongation = -geom.c * d_full[2 * i] - geom.s * d_full[2 * i + 1]
                    + geom.c * d_full[2 * j]
                    + geom.s * d_full[2 * j + 1];

                MemberForce {
                    member: member.id.clone(),
                    axial: geom.stiffness * elongation,
                }
            })
            .collect()
    }

    /// Map indexed numeric results back to caller identifiers
    fn collect_results(
        &self,
        d_full: &FEVec,
        reactions: &FEVec,
        member_forces: Vec<MemberForce>,
    ) -> AnalysisResults {
        let mut displacements = HashMap::with_capacity(self.nodes.len());
        let mut reaction_map = HashMap::with_capacity(self.nodes.len());
        let mut max_displacement = 0.0_f64;

        for (ordinal, node) in self.nodes.iter().enumerate() {
            let disp = NodeDisplacement {
                dx: d_full[2 * ordinal],
                dy: d_full[2 * ordinal + 1],
            };
            max_displacement = max_displacement.max(disp.magnitude());
            displacements.insert(node.id.clone(), disp);
            reaction_map.insert(
                node.id.clone(),
                Reaction {
                    rx: reactions[2 * ordinal],
                    ry: reactions[2 * ordinal + 1],
                },
            );
        }

        AnalysisResults {
            displacements,
            reactions: reaction_map,
            member_forces,
            max_displacement,
        }
    }

    fn member_ordinals(&self, member: &Member) -> (usize, usize) {
        // Endpoints resolved at construction
        (self.index[&member.from], self.index[&member.to])
    }

    fn member_geometry(&self, member: &Member) -> math::AxialGeometry {
        let (i, j) = self.member_ordinals(member);
        let (ni, nj) = (&self.nodes[i], &self.nodes[j]);
        math::axial_geometry(nj.x - ni.x, nj.y - ni.y, member.area, member.elastic_modulus)
            .expect("member geometry validated at construction")
    }
}

/// Validate and analyze in one call.
///
/// Convenience wrapper for callers holding raw editor output: builds the
/// model and runs the analysis, surfacing the first validation or solve
/// error.
pub fn compute(nodes: Vec<Node>, members: Vec<Member>) -> TrussResult<AnalysisResults> {
    TrussModel::new(nodes, members)?.analyze()
}

fn ensure_finite(value: f64, describe: impl FnOnce() -> String) -> TrussResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(TrussError::NonFinite(describe()))
    }
}

fn resolve(index: &HashMap<Id, usize>, member: &Id, node: &Id) -> TrussResult<usize> {
    index
        .get(node)
        .copied()
        .ok_or_else(|| TrussError::NodeNotFound {
            member: member.clone(),
            node: node.clone(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::Support;
    use crate::loads::NodeLoad;
    use approx::assert_relative_eq;

    fn triangle() -> (Vec<Node>, Vec<Member>) {
        let nodes = vec![
            Node::new(1, 0.0, 0.0).with_support(Support::fixed()),
            Node::new(2, 4.0, 0.0).with_support(Support::roller_y()),
            Node::new(3, 2.0, 3.0).with_load(NodeLoad::force(5000.0, -10000.0)),
        ];
        let members = vec![
            Member::new("1-2", 1, 2, 0.004, 200e9),
            Member::new("1-3", 1, 3, 0.004, 200e9),
            Member::new("2-3", 2, 3, 0.004, 200e9),
        ];
        (nodes, members)
    }

    #[test]
    fn test_duplicate_node_rejected() {
        let nodes = vec![Node::new(1, 0.0, 0.0), Node::new(1, 1.0, 0.0)];
        let err = TrussModel::new(nodes, vec![]).unwrap_err();
        assert!(matches!(err, TrussError::DuplicateNode(_)));
    }

    #[test]
    fn test_non_finite_coordinate_rejected() {
        let nodes = vec![Node::new(1, f64::NAN, 0.0)];
        let err = TrussModel::new(nodes, vec![]).unwrap_err();
        assert!(matches!(err, TrussError::NonFinite(_)));
    }

    #[test]
    fn test_non_finite_section_rejected() {
        let nodes = vec![Node::new(1, 0.0, 0.0), Node::new(2, 1.0, 0.0)];
        let members = vec![Member::new("1-2", 1, 2, f64::INFINITY, 200e9)];
        let err = TrussModel::new(nodes, members).unwrap_err();
        assert!(matches!(err, TrussError::NonFinite(_)));
    }

    #[test]
    fn test_unknown_endpoint_rejected() {
        let nodes = vec![Node::new(1, 0.0, 0.0)];
        let members = vec![Member::new("1-9", 1, 9, 0.01, 200e9)];
        let err = TrussModel::new(nodes, members).unwrap_err();
        assert!(matches!(err, TrussError::NodeNotFound { .. }));
    }

    #[test]
    fn test_zero_length_member_rejected() {
        // Coincident endpoints are degenerate even when fully restrained
        let nodes = vec![
            Node::new(1, 1.0, 1.0).with_support(Support::fixed()),
            Node::new(2, 1.0, 1.0).with_support(Support::fixed()),
        ];
        let members = vec![Member::new("1-2", 1, 2, 0.01, 200e9)];
        let err = TrussModel::new(nodes, members).unwrap_err();
        assert!(matches!(err, TrussError::ZeroLengthMember(_)));
    }

    #[test]
    fn test_fully_restrained_model_has_no_free_dofs() {
        let nodes = vec![
            Node::new(1, 0.0, 0.0).with_support(Support::fixed()),
            Node::new(2, 1.0, 0.0).with_support(Support::fixed()),
        ];
        let members = vec![Member::new("1-2", 1, 2, 0.01, 200e9)];
        let model = TrussModel::new(nodes, members).unwrap();
        assert!(matches!(model.analyze(), Err(TrussError::NoFreeDofs)));
    }

    #[test]
    fn test_global_stiffness_is_symmetric() {
        let (nodes, members) = triangle();
        let model = TrussModel::new(nodes, members).unwrap();
        let k = model.assemble_stiffness();

        for i in 0..model.dof_count() {
            for j in 0..model.dof_count() {
                assert_relative_eq!(k[(i, j)], k[(j, i)], epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn test_partition_preserves_dof_order() {
        let (nodes, members) = triangle();
        let model = TrussModel::new(nodes, members).unwrap();
        let (free, restrained) = model.partition_dofs();

        // Node 1 fixed both axes, node 2 fixed y only, node 3 free
        assert_eq!(restrained, vec![0, 1, 3]);
        assert_eq!(free, vec![2, 4, 5]);
    }

    #[test]
    fn test_triangle_solves() {
        let (nodes, members) = triangle();
        let results = compute(nodes, members).unwrap();

        assert_eq!(results.member_forces.len(), 3);
        assert!(results.max_displacement > 0.0);

        // Supports carry the applied load
        let r1 = results.reaction(&Id::from(1)).unwrap();
        let r2 = results.reaction(&Id::from(2)).unwrap();
        assert_relative_eq!(r1.rx, -5000.0, epsilon = 1e-6);
        assert_relative_eq!(r1.ry + r2.ry, 10000.0, epsilon = 1e-6);
    }
}
