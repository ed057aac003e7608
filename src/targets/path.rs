//! Hierarchy addresses for re-finding a surface node after reload.
//!
//! An address is the list of sibling ordinals from the target root down to
//! the node, joined with [`PATH_DELIMITER`], e.g. `"0/2/1"`. The root itself
//! has the empty address. Addresses are purely structural, so a resolved
//! node must be corroborated by name before it is trusted.

use conformal_core::scene::{NodeId, SceneTree};

use crate::error::{TargetError, TargetResult};

pub const PATH_DELIMITER: char = '/';

/// Address of `leaf` relative to `root`.
///
/// Fails with [`TargetError::NotDescendant`] if walking up from `leaf`
/// reaches a parentless node before `root`.
pub fn encode_path(scene: &dyn SceneTree, leaf: NodeId, root: NodeId) -> TargetResult<String> {
    let mut indices = Vec::new();
    let mut current = leaf;
    while current != root {
        let parent = scene
            .parent(current)
            .ok_or(TargetError::NotDescendant { leaf })?;
        indices.push(scene.sibling_index(current));
        current = parent;
    }

    let mut path = String::new();
    for (i, index) in indices.iter().rev().enumerate() {
        if i > 0 {
            path.push(PATH_DELIMITER);
        }
        path.push_str(&index.to_string());
    }
    Ok(path)
}

/// Resolve `path` by walking child ordinals down from `root`.
///
/// Fails with [`TargetError::PathOutOfRange`] if an ordinal exceeds the
/// current child count, or [`TargetError::MalformedPath`] if a segment is
/// not a plain run of ASCII digits.
pub fn decode_path(scene: &dyn SceneTree, path: &str, root: NodeId) -> TargetResult<NodeId> {
    if path.is_empty() {
        return Ok(root);
    }

    let mut current = root;
    for (depth, segment) in path.split(PATH_DELIMITER).enumerate() {
        let index = parse_ordinal(segment).ok_or_else(|| TargetError::MalformedPath {
            path: path.to_owned(),
            reason: format!("segment {depth} ('{segment}') is not an ordinal"),
        })?;
        current = scene
            .child(current, index)
            .ok_or_else(|| TargetError::PathOutOfRange {
                depth,
                index,
                child_count: scene.child_count(current),
            })?;
    }
    Ok(current)
}

/// Digits-only ordinal. Values past `usize::MAX` saturate, since no node
/// has that many children and they must surface as out of range.
fn parse_ordinal(segment: &str) -> Option<usize> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(segment.parse().unwrap_or(usize::MAX))
}
