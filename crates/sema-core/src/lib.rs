//! # sema-core
//!
//! Foundation crate for the sema intent core.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{ConversationConfig, ResolverConfig};
pub use errors::{SemaError, SemaResult};
pub use models::{
    Action, ConversationContext, ConversationTurn, Entities, EntityKind, Intent, Suggestion,
};
