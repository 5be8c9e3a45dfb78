//! Site content: translation trees, fallback resolution, and publish
//! validation.
//!
//! Content for a site is a nested tree whose terminal values are strings
//! keyed by language code. The resolver walks the *live* tree only; draft
//! overlays are staged separately (see [`crate::stage`]) and never leak
//! into rendering.

pub mod resolver;
pub mod tree;
pub mod validation;

pub use resolver::resolve_content;
pub use tree::{TranslationTree, TreeNode};
pub use validation::{PublishCheck, can_publish_translations};
