//! Data model: actions, intents, entities, turns, contexts, summaries.

mod action;
mod context;
mod entities;
mod intent;
mod status;
mod summary;
mod turn;

pub use action::Action;
pub use context::{ConversationContext, UserPreferences};
pub use entities::{Entities, EntityKind};
pub use intent::{Intent, Suggestion};
pub use status::{MatchMode, ResolverStatus};
pub use summary::{ConversationSummary, SummaryStatus};
pub use turn::ConversationTurn;
