//! Persistence documents for saved truss diagrams.
//!
//! The diagram editor saves `{ time, nodes, edges }` JSON documents whose
//! node records mix structural data with presentation fields (shape, color,
//! image, size). Only the structural fields are read here; unknown fields are
//! ignored. The editor's single-boolean `fixed` shorthand, meaning both axes,
//! is normalized to per-axis restraints during conversion.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::elements::{Id, Member, Node, Support};
use crate::error::TrussResult;
use crate::loads::NodeLoad;
use crate::model::TrussModel;

/// Restraint state as stored in documents: one boolean covering both axes,
/// or explicit per-axis flags
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FixedState {
    /// Editor shorthand: one flag for both axes
    Both(bool),
    /// Explicit per-axis flags
    PerAxis {
        /// X axis restrained
        x: bool,
        /// Y axis restrained
        y: bool,
    },
}

impl FixedState {
    /// Normalize to per-axis restraints
    pub fn to_support(self) -> Support {
        match self {
            FixedState::Both(flag) => Support::with_restraints(flag, flag),
            FixedState::PerAxis { x, y } => Support::with_restraints(x, y),
        }
    }
}

impl From<Support> for FixedState {
    fn from(support: Support) -> Self {
        FixedState::PerAxis {
            x: support.x,
            y: support.y,
        }
    }
}

/// Applied load as stored in documents; absent components default to zero
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LoadRecord {
    /// Force in X direction
    #[serde(default)]
    pub fx: f64,
    /// Force in Y direction
    #[serde(default)]
    pub fy: f64,
}

/// One node record in a saved document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeRecord {
    /// Node identifier
    pub id: Id,
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
    /// Restraint state; required, either form
    pub fixed: FixedState,
    /// Applied load, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load: Option<LoadRecord>,
}

/// One edge record in a saved document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeRecord {
    /// Edge identifier
    pub id: Id,
    /// Start node identifier
    pub from: Id,
    /// End node identifier
    pub to: Id,
    /// Cross-sectional area
    pub area: f64,
    /// Elastic modulus
    pub elastic_modulus: f64,
}

/// A saved diagram: timestamp plus raw node and edge arrays
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrussDocument {
    /// When the document was saved
    pub time: DateTime<Utc>,
    /// Node records in editor order
    pub nodes: Vec<NodeRecord>,
    /// Edge records in editor order
    pub edges: Vec<EdgeRecord>,
}

impl TrussDocument {
    /// Create a document from records, stamped with the current time
    pub fn new(nodes: Vec<NodeRecord>, edges: Vec<EdgeRecord>) -> Self {
        Self {
            time: Utc::now(),
            nodes,
            edges,
        }
    }

    /// Capture a document from structural elements
    pub fn from_elements(nodes: &[Node], members: &[Member]) -> Self {
        let node_records = nodes
            .iter()
            .map(|node| NodeRecord {
                id: node.id.clone(),
                x: node.x,
                y: node.y,
                fixed: node.support.into(),
                load: (node.load != NodeLoad::none()).then(|| LoadRecord {
                    fx: node.load.fx,
                    fy: node.load.fy,
                }),
            })
            .collect();

        let edge_records = members
            .iter()
            .map(|member| EdgeRecord {
                id: member.id.clone(),
                from: member.from.clone(),
                to: member.to.clone(),
                area: member.area,
                elastic_modulus: member.elastic_modulus,
            })
            .collect();

        Self::new(node_records, edge_records)
    }

    /// Parse a document from JSON
    pub fn from_json(json: &str) -> TrussResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the document to JSON
    pub fn to_json(&self) -> TrussResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Convert the raw records into engine elements, preserving order
    pub fn to_elements(&self) -> (Vec<Node>, Vec<Member>) {
        let nodes = self
            .nodes
            .iter()
            .map(|record| {
                let load = record.load.unwrap_or_default();
                Node::new(record.id.clone(), record.x, record.y)
                    .with_support(record.fixed.to_support())
                    .with_load(NodeLoad::force(load.fx, load.fy))
            })
            .collect();

        let members = self
            .edges
            .iter()
            .map(|record| {
                Member::new(
                    record.id.clone(),
                    record.from.clone(),
                    record.to.clone(),
                    record.area,
                    record.elastic_modulus,
                )
            })
            .collect();

        (nodes, members)
    }

    /// Validate the document into a model ready for analysis
    pub fn to_model(&self) -> TrussResult<TrussModel> {
        let (nodes, members) = self.to_elements();
        TrussModel::new(nodes, members)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAVED_DOCUMENT: &str = r#"{
        "time": "2024-03-01T12:00:00Z",
        "nodes": [
            { "id": 1, "x": -100.0, "y": 0.0, "fixed": true,
              "physics": false, "shape": "image", "size": 25 },
            { "id": 2, "x": 100.0, "y": 0.0, "fixed": { "x": false, "y": true },
              "color": "grey" },
            { "id": 3, "x": 0.0, "y": 50.0, "fixed": false,
              "load": { "fy": -1000.0 } }
        ],
        "edges": [
            { "id": "1-2", "from": 1, "to": 2, "area": 1.0,
              "elastic_modulus": 1e9, "width": 5, "smooth": false },
            { "id": "1-3", "from": 1, "to": 3, "area": 1.0,
              "elastic_modulus": 1e9, "width": 5, "smooth": false },
            { "id": "2-3", "from": 2, "to": 3, "area": 1.0,
              "elastic_modulus": 1e9, "width": 5, "smooth": false }
        ]
    }"#;

    #[test]
    fn test_parse_editor_document() {
        let doc = TrussDocument::from_json(SAVED_DOCUMENT).unwrap();
        assert_eq!(doc.nodes.len(), 3);
        assert_eq!(doc.edges.len(), 3);

        let (nodes, members) = doc.to_elements();

        // Boolean shorthand covers both axes
        assert_eq!(nodes[0].support, Support::fixed());
        // Per-axis form passes through
        assert_eq!(nodes[1].support, Support::roller_y());
        assert_eq!(nodes[2].support, Support::free());

        // Absent load components default to zero
        assert_eq!(nodes[2].load, NodeLoad::fy(-1000.0));
        assert_eq!(nodes[0].load, NodeLoad::none());

        assert_eq!(members[1].from, Id::from(1));
        assert_eq!(members[1].to, Id::from(3));
    }

    #[test]
    fn test_missing_fixed_is_rejected() {
        let json = r#"{
            "time": "2024-03-01T12:00:00Z",
            "nodes": [{ "id": 1, "x": 0.0, "y": 0.0 }],
            "edges": []
        }"#;
        assert!(TrussDocument::from_json(json).is_err());
    }

    #[test]
    fn test_document_round_trip() {
        let doc = TrussDocument::from_json(SAVED_DOCUMENT).unwrap();
        let json = doc.to_json().unwrap();
        let reparsed = TrussDocument::from_json(&json).unwrap();

        assert_eq!(reparsed.time, doc.time);
        let (original, _) = doc.to_elements();
        let (restored, _) = reparsed.to_elements();
        for (a, b) in original.iter().zip(&restored) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.support, b.support);
            assert_eq!(a.load, b.load);
        }
    }

    #[test]
    fn test_document_analyzes() {
        let doc = TrussDocument::from_json(SAVED_DOCUMENT).unwrap();
        let model = doc.to_model().unwrap();
        let results = model.analyze().unwrap();

        assert!(results.max_displacement > 0.0);
        assert_eq!(results.member_forces.len(), 3);
    }
}
