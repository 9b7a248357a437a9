//! Error types for truss analysis

use thiserror::Error;

use crate::elements::Id;

/// Main error type for truss model construction and analysis
#[derive(Error, Debug)]
pub enum TrussError {
    #[error("Member '{member}' references unknown node '{node}'")]
    NodeNotFound {
        /// Member holding the dangling reference
        member: Id,
        /// The identifier that failed to resolve
        node: Id,
    },

    #[error("Duplicate node identifier '{0}'")]
    DuplicateNode(Id),

    #[error("Value is not finite: {0}")]
    NonFinite(String),

    #[error("Member '{0}' has zero length")]
    ZeroLengthMember(Id),

    #[error("No free degrees of freedom remain after applying supports")]
    NoFreeDofs,

    #[error("Singular stiffness matrix - structure may be unstable or have insufficient supports")]
    SingularMatrix,

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for truss operations
pub type TrussResult<T> = Result<T, TrussError>;
