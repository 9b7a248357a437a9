//! Member element - a prismatic axial member between two joints

use serde::{Deserialize, Serialize};

use crate::elements::Id;

/// A pin-ended truss member carrying axial force only
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    /// Caller-supplied identifier
    pub id: Id,
    /// Identifier of the start node
    pub from: Id,
    /// Identifier of the end node
    pub to: Id,
    /// Cross-sectional area (m²)
    pub area: f64,
    /// Elastic modulus (Pa)
    pub elastic_modulus: f64,
}

impl Member {
    /// Create a new member
    pub fn new(
        id: impl Into<Id>,
        from: impl Into<Id>,
        to: impl Into<Id>,
        area: f64,
        elastic_modulus: f64,
    ) -> Self {
        Self {
            id: id.into(),
            from: from.into(),
            to: to.into(),
            area,
            elastic_modulus,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_member_creation() {
        let member = Member::new("1-2", 1, 2, 0.01, 2.0e11);
        assert_eq!(member.id, Id::from("1-2"));
        assert_eq!(member.from, Id::from(1));
        assert_eq!(member.to, Id::from(2));
        assert_eq!(member.area, 0.01);
        assert_eq!(member.elastic_modulus, 2.0e11);
    }
}
