use chrono::{DateTime, Utc};
use secrecy::SecretString;

use crate::models::domain::{LevelInfo, UserProfile};

/// Explicit authenticated-session state. Created at login, dropped at
/// logout; every authorized request borrows the bearer credential from
/// here instead of reaching into ambient storage.
#[derive(Clone, Debug)]
pub struct SessionContext {
    user_id: String,
    user_name: String,
    token: SecretString,
    created_at: DateTime<Utc>,
    cached_profile: Option<CachedProfile>,
}

/// Last profile fetch, kept so views can render instantly while a refresh
/// is in flight. Invalidated whenever the XP total may have changed.
#[derive(Clone, Debug)]
pub struct CachedProfile {
    pub user: UserProfile,
    pub level: LevelInfo,
    pub fetched_at: DateTime<Utc>,
}

impl SessionContext {
    pub fn new(user: &UserProfile, token: SecretString) -> Self {
        log::info!("Session created for user {}", user.id);

        Self {
            user_id: user.id.clone(),
            user_name: user.name.clone(),
            token,
            created_at: Utc::now(),
            cached_profile: None,
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn bearer_token(&self) -> &SecretString {
        &self.token
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn cache_profile(&mut self, user: UserProfile, level: LevelInfo) {
        self.cached_profile = Some(CachedProfile {
            user,
            level,
            fetched_at: Utc::now(),
        });
    }

    pub fn cached_profile(&self) -> Option<&CachedProfile> {
        self.cached_profile.as_ref()
    }

    /// Drop the cached profile, forcing the next view to refetch.
    pub fn invalidate_profile(&mut self) {
        self.cached_profile = None;
    }
}
