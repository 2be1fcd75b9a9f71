//! # sema-conversation
//!
//! Short-lived conversational context: session lifecycle with idle
//! eviction, a bounded turn log, topic and preference tracking,
//! context-aware response augmentation, and JSON history persistence.
//!
//! Not internally synchronized: a hosting environment that calls in
//! from multiple threads must serialize access externally.

pub mod manager;
pub mod persist;
pub mod phrases;

pub use manager::ConversationManager;
