use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use secrecy::SecretString;

use crate::{
    api::http::ApiConnection,
    errors::AppResult,
    models::{
        domain::LeaderboardEntry,
        dto::{
            request::{LoginRequest, RegisterRequest},
            response::{ApiEnvelope, AuthResponse, ProfileResponse},
        },
    },
};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserApi: Send + Sync {
    async fn login(&self, request: &LoginRequest) -> AppResult<AuthResponse>;
    async fn register(&self, request: &RegisterRequest) -> AppResult<AuthResponse>;
    async fn fetch_profile(&self, token: &SecretString) -> AppResult<ProfileResponse>;
    async fn fetch_leaderboard(&self, token: &SecretString) -> AppResult<Vec<LeaderboardEntry>>;
}

pub struct HttpUserApi {
    conn: ApiConnection,
}

impl HttpUserApi {
    pub fn new(conn: ApiConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl UserApi for HttpUserApi {
    async fn login(&self, request: &LoginRequest) -> AppResult<AuthResponse> {
        log::info!("Logging in {}", request.email);
        self.conn.post_json("users/login", request, None).await
    }

    async fn register(&self, request: &RegisterRequest) -> AppResult<AuthResponse> {
        log::info!("Registering {}", request.email);
        self.conn.post_json("users/register", request, None).await
    }

    async fn fetch_profile(&self, token: &SecretString) -> AppResult<ProfileResponse> {
        let envelope: ApiEnvelope<ProfileResponse> =
            self.conn.get_json("users/profile", Some(token)).await?;
        Ok(envelope.data)
    }

    async fn fetch_leaderboard(&self, token: &SecretString) -> AppResult<Vec<LeaderboardEntry>> {
        let envelope: ApiEnvelope<Vec<LeaderboardEntry>> =
            self.conn.get_json("users/leaderboard", Some(token)).await?;
        Ok(envelope.data)
    }
}
