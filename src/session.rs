//! Signed-in user resolution
//!
//! The login step (outside this crate) stores the backend's login response in
//! `session.json`. Every report request runs on behalf of exactly one user,
//! resolved once here and passed explicitly into the report workflow.

use std::path::PathBuf;

use tracing::debug;

use crate::config::{FinReportPaths, Settings};
use crate::error::{FinReportError, FinReportResult};
use crate::models::{User, UserId};
use crate::storage::{read_json_optional, remove_if_exists};

/// Reads and clears the stored session
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(paths: &FinReportPaths) -> Self {
        Self {
            path: paths.session_file(),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// The signed-in user, if any
    pub fn current_user(&self) -> FinReportResult<Option<User>> {
        read_json_optional(&self.path)
            .map_err(|e| FinReportError::Session(format!("Unreadable session file: {}", e)))
    }

    /// Sign out. Returns whether a session was present.
    pub fn clear(&self) -> FinReportResult<bool> {
        remove_if_exists(&self.path)
    }
}

/// Resolve the user a report is requested for
///
/// Order: explicit `--user-id`, the stored session, then
/// `default_user_id` from settings. With none of these the request is
/// rejected rather than silently run as some other user.
pub fn resolve_user(
    explicit: Option<UserId>,
    store: &SessionStore,
    settings: &Settings,
) -> FinReportResult<UserId> {
    if let Some(id) = explicit {
        debug!(user_id = %id, "using explicit user id");
        return Ok(id);
    }

    if let Some(user) = store.current_user()? {
        debug!(user_id = %user.user_id, "using session user");
        return Ok(user.user_id);
    }

    if let Some(id) = settings.default_user_id {
        debug!(user_id = %id, "using configured default user");
        return Ok(id);
    }

    Err(FinReportError::Unauthenticated(
        "log in first, pass --user-id, or set default_user_id in config.json".into(),
    ))
}
