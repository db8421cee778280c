use std::fmt;

use serde::Serialize;
use uuid::Uuid;

/// Stable identity of a node, used by renderers for keying and diffing.
///
/// Ids are name-based (UUID v5) hashes of the node's kind tag, its position and its
/// normalized content, so the same input always yields the same ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(Uuid);

/// Namespace for all pagemark node ids.
const NAMESPACE: Uuid = Uuid::from_u128(0x6a1f_03c2_5d7e_4b8a_9c31_e2f4_0b6d_7a95);

const SEP: char = '\u{1f}';

impl NodeId {
    /// Derives an id from a kind tag, a position and content.
    ///
    /// `position` is the source line for block nodes and the index within the parent
    /// sequence for inline nodes.
    pub fn derive(tag: &str, position: usize, content: &str) -> Self {
        let key = format!("{tag}{SEP}{position}{SEP}{content}");
        Self(Uuid::new_v5(&NAMESPACE, key.as_bytes()))
    }

    /// Derives the id of a node synthesized around an existing one (list containers,
    /// sections).
    pub fn derive_from(tag: &str, position: usize, parent: NodeId) -> Self {
        Self::derive(tag, position, &parent.to_string())
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
