//! Error types for target construction and reconstruction.
//!
//! `project` and `render` never fail; everything here is raised while
//! building targets from a live scene or from saved records.

use conformal_core::scene::NodeId;
use thiserror::Error;

use crate::targets::BodyId;

/// Reason a candidate surface cannot receive a decal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    #[error("node has no mesh renderer")]
    MissingRenderer,
    #[error("node has no mesh filter")]
    MissingMeshFilter,
    #[error("node is not active in the hierarchy")]
    Inactive,
    #[error("renderer has no material")]
    MissingMaterial,
    #[error("shader '{shader}' is blacklisted")]
    BlacklistedShader { shader: String },
    #[error("mesh filter has no mesh")]
    MissingMesh,
}

/// Target error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TargetError {
    #[error("invalid target: {0}")]
    Validation(#[from] ValidationFailure),
    #[error("target name does not match: expected '{expected}', found '{found}'")]
    IdentityMismatch { expected: String, found: String },
    #[error("child index {index} at depth {depth} is out of range ({child_count} children)")]
    PathOutOfRange {
        depth: usize,
        index: usize,
        child_count: usize,
    },
    #[error("malformed target path '{path}': {reason}")]
    MalformedPath { path: String, reason: String },
    #[error("{leaf} is not a descendant of the target root")]
    NotDescendant { leaf: NodeId },
    #[error("body {body} no longer exists")]
    MissingBody { body: BodyId },
}

pub type TargetResult<T> = Result<T, TargetError>;
