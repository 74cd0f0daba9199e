use std::sync::Arc;

use secrecy::SecretString;
use validator::Validate;

use crate::{
    api::UserApi,
    auth::SessionContext,
    errors::AppResult,
    models::{
        domain::{LeaderboardEntry, LessonProgressRecord, LevelInfo, UserProfile},
        dto::request::{LoginRequest, RegisterRequest},
    },
    services::leveling,
};

/// Profile as the dashboard and profile views consume it: the raw user
/// document plus the level standing derived from its XP total.
#[derive(Clone, Debug)]
pub struct ProfileView {
    pub user: UserProfile,
    pub progress: Vec<LessonProgressRecord>,
    pub level: LevelInfo,
}

pub struct UserService {
    api: Arc<dyn UserApi>,
}

impl UserService {
    pub fn new(api: Arc<dyn UserApi>) -> Self {
        Self { api }
    }

    /// Authenticate and open an explicit session context.
    pub async fn login(&self, request: &LoginRequest) -> AppResult<SessionContext> {
        request.validate()?;

        let auth = self.api.login(request).await?;
        Ok(SessionContext::new(
            &auth.data,
            SecretString::from(auth.token),
        ))
    }

    pub async fn register(&self, request: &RegisterRequest) -> AppResult<SessionContext> {
        request.validate()?;

        let auth = self.api.register(request).await?;
        Ok(SessionContext::new(
            &auth.data,
            SecretString::from(auth.token),
        ))
    }

    /// End the session. Consuming the context is what clears the
    /// credential and any cached profile.
    pub fn logout(&self, ctx: SessionContext) {
        log::info!("Session ended for user {}", ctx.user_id());
        drop(ctx);
    }

    /// Fetch the profile, derive the level standing, and refresh the
    /// session's cached copy.
    pub async fn profile(&self, ctx: &mut SessionContext) -> AppResult<ProfileView> {
        let response = self.api.fetch_profile(ctx.bearer_token()).await?;
        let level = leveling::level_of(response.user.total_xp)?;

        ctx.cache_profile(response.user.clone(), level.clone());

        Ok(ProfileView {
            user: response.user,
            progress: response.progress,
            level,
        })
    }

    /// Top learners by XP. Entries missing a server-computed level get one
    /// derived from their XP total so every row can render a level badge.
    pub async fn leaderboard(&self, ctx: &SessionContext) -> AppResult<Vec<LeaderboardEntry>> {
        let mut entries = self.api.fetch_leaderboard(ctx.bearer_token()).await?;

        for entry in &mut entries {
            if entry.level.is_none() {
                entry.level = Some(leveling::level_of(entry.xp.max(0))?.level);
            }
        }

        Ok(entries)
    }
}
