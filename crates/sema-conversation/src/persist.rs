//! History persistence: the whole session map as one JSON document.
//!
//! Format: session id → context record; timestamps serialize as
//! RFC 3339 strings and round-trip losslessly. Saves write to a sibling
//! temporary file and atomically rename over the target, so a failed
//! save never leaves a truncated file. Loads parse into a staging value
//! first; on any failure the in-memory history is left untouched.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{info, warn};

use sema_core::errors::{PersistenceError, SemaResult};
use sema_core::models::ConversationContext;

use crate::manager::ConversationManager;

impl ConversationManager {
    /// Serialize all sessions (not just the current one) to `path`.
    pub fn save_history(&self, path: &Path) -> SemaResult<()> {
        let json = serde_json::to_string_pretty(&self.history).map_err(|e| {
            warn!(error = %e, "failed to serialize conversation history");
            PersistenceError::Serialize {
                reason: e.to_string(),
            }
        })?;

        let tmp = path.with_extension("tmp");
        if let Err(e) = fs::write(&tmp, &json) {
            warn!(path = %tmp.display(), error = %e, "failed to write history temp file");
            return Err(PersistenceError::Io {
                path: tmp.display().to_string(),
                source: e,
            }
            .into());
        }
        if let Err(e) = fs::rename(&tmp, path) {
            warn!(path = %path.display(), error = %e, "failed to replace history file");
            // Best effort: don't leave the temp file behind.
            let _ = fs::remove_file(&tmp);
            return Err(PersistenceError::Io {
                path: path.display().to_string(),
                source: e,
            }
            .into());
        }

        info!(
            path = %path.display(),
            sessions = self.history.len(),
            "saved conversation history"
        );
        Ok(())
    }

    /// Replace the in-memory history with the sessions stored at
    /// `path`. On failure the previous state is kept as-is.
    pub fn load_history(&mut self, path: &Path) -> SemaResult<()> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read history file");
                return Err(PersistenceError::Io {
                    path: path.display().to_string(),
                    source: e,
                }
                .into());
            }
        };

        let staged: HashMap<String, ConversationContext> = match serde_json::from_str(&raw) {
            Ok(staged) => staged,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to parse history file");
                return Err(PersistenceError::Deserialize {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                }
                .into());
            }
        };

        self.history = staged;
        // The current pointer only survives if its session did.
        if let Some(current) = &self.current {
            if !self.history.contains_key(current) {
                self.current = None;
            }
        }

        info!(
            path = %path.display(),
            sessions = self.history.len(),
            "loaded conversation history"
        );
        Ok(())
    }
}
