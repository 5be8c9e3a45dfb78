//! WeCelebrate Content Kernel Library
//!
//! Translation resolution, draft staging, and language selection for
//! multi-tenant gifting sites. Admin and rendering collaborators consume
//! this library; persistence goes through the [`storage::SiteStorage`]
//! trait.

pub mod config;
pub mod content;
pub mod error;
pub mod models;
pub mod prefs;
pub mod services;
pub mod stage;
pub mod storage;

pub use config::Config;
pub use content::{PublishCheck, TranslationTree, TreeNode, can_publish_translations, resolve_content};
pub use error::{KernelError, KernelResult};
pub use models::{Direction, DraftSettings, Language, Site, SiteSettings, SiteStatus};
pub use services::LocaleService;
pub use stage::{DraftUpdate, PublishResult, StageService, discard_draft, publish, save_draft};
pub use storage::{MemorySiteStorage, SiteStorage};
