//! Translation tree model.
//!
//! A site's content is a recursively nested mapping: interior branches
//! group fields (`welcomePage`, `header`, ...), terminal string values are
//! keyed by language code. Whether a branch is a language map is decided
//! positionally — by where a field path lands — so partially filled or
//! malformed trees degrade gracefully instead of failing.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A node in a translation tree.
///
/// Serialization is untagged: JSON objects become branches, strings become
/// text values, and any other JSON value (null, number, bool, array) is
/// carried verbatim as [`TreeNode::Other`] so round-trips never destroy
/// data. `Other` values are never resolvable content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    /// Interior mapping node.
    Branch(IndexMap<String, TreeNode>),
    /// Terminal string value.
    Text(String),
    /// Terminal non-string value. Treated as a missing translation.
    Other(serde_json::Value),
}

impl TreeNode {
    /// Borrow the children of a branch node.
    pub fn as_branch(&self) -> Option<&IndexMap<String, TreeNode>> {
        match self {
            Self::Branch(children) => Some(children),
            _ => None,
        }
    }

    /// Borrow the string value of a text node.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }
}

impl From<serde_json::Value> for TreeNode {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Object(map) => Self::Branch(
                map.into_iter()
                    .map(|(key, child)| (key, TreeNode::from(child)))
                    .collect(),
            ),
            serde_json::Value::String(text) => Self::Text(text),
            other => Self::Other(other),
        }
    }
}

/// A site's translation tree: the root mapping from field segments to
/// nodes.
///
/// Field paths are dot-delimited (`"welcomePage.title"`); every segment
/// must land on a branch. Key iteration order is insertion order, which
/// the resolver relies on for its "first available language" tier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationTree(pub IndexMap<String, TreeNode>);

impl TranslationTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree from a JSON value. Anything but an object yields an
    /// empty tree.
    pub fn from_value(value: serde_json::Value) -> Self {
        match TreeNode::from(value) {
            TreeNode::Branch(children) => Self(children),
            _ => Self::default(),
        }
    }

    /// Whether the tree has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Walk a dot-delimited field path to the branch it addresses.
    ///
    /// Returns `None` when the path is empty, a segment is missing, or any
    /// step (including the landing node) is not a branch.
    pub fn branch_at(&self, path: &str) -> Option<&IndexMap<String, TreeNode>> {
        if path.is_empty() {
            return None;
        }
        let mut current = &self.0;
        for segment in path.split('.') {
            current = current.get(segment)?.as_branch()?;
        }
        Some(current)
    }

    /// Usable translation at `path` for `language`: a string value whose
    /// trimmed form is non-empty. Empty, whitespace-only, and non-string
    /// entries read as missing.
    pub fn text_at(&self, path: &str, language: &str) -> Option<&str> {
        language_entry(self.branch_at(path)?, language)
    }

    /// Set a translation, creating intermediate branches as needed. An
    /// existing non-branch node along the path is replaced by a branch.
    pub fn set_text(&mut self, path: &str, language: &str, value: impl Into<String>) {
        if path.is_empty() {
            return;
        }
        let mut current = &mut self.0;
        for segment in path.split('.') {
            let node = current
                .entry(segment.to_string())
                .or_insert_with(|| TreeNode::Branch(IndexMap::new()));
            if node.as_branch().is_none() {
                *node = TreeNode::Branch(IndexMap::new());
            }
            current = match node {
                TreeNode::Branch(children) => children,
                // Just replaced with a branch above.
                _ => return,
            };
        }
        current.insert(language.to_string(), TreeNode::Text(value.into()));
    }
}

/// Look up a usable entry in a language map: present, a string, and
/// non-empty after trimming.
pub(crate) fn language_entry<'a>(
    entries: &'a IndexMap<String, TreeNode>,
    code: &str,
) -> Option<&'a str> {
    match entries.get(code)? {
        TreeNode::Text(value) if !value.trim().is_empty() => Some(value),
        _ => None,
    }
}
