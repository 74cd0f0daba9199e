use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::{api::http::ApiConnection, errors::AppResult, models::domain::Section};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait LessonApi: Send + Sync {
    async fn fetch_sections(&self) -> AppResult<Vec<Section>>;
}

pub struct HttpLessonApi {
    conn: ApiConnection,
}

impl HttpLessonApi {
    pub fn new(conn: ApiConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl LessonApi for HttpLessonApi {
    async fn fetch_sections(&self) -> AppResult<Vec<Section>> {
        log::info!("Fetching lesson sections");
        self.conn.get_json("lessons", None).await
    }
}
