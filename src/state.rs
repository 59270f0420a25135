use std::sync::Arc;

use crate::auth::repo::{PgUserStore, UserStore};
use crate::config::AppConfig;
use crate::db;
use crate::ideas::repo::{IdeaStore, PgIdeaStore};
use crate::rating::{IdeaRater, OpenAiRater};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub users: Arc<dyn UserStore>,
    pub ideas: Arc<dyn IdeaStore>,
    pub rater: Arc<dyn IdeaRater>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);

        let pool = db::connect(&config.database_url).await?;
        db::migrate(&pool).await?;

        let rater = Arc::new(OpenAiRater::new(&config.rating)?) as Arc<dyn IdeaRater>;

        let users = Arc::new(PgUserStore::new(pool.clone())) as Arc<dyn UserStore>;
        let ideas = Arc::new(PgIdeaStore::new(pool)) as Arc<dyn IdeaStore>;

        Ok(Self::from_parts(config, users, ideas, rater))
    }

    pub fn from_parts(
        config: Arc<AppConfig>,
        users: Arc<dyn UserStore>,
        ideas: Arc<dyn IdeaStore>,
        rater: Arc<dyn IdeaRater>,
    ) -> Self {
        Self {
            config,
            users,
            ideas,
            rater,
        }
    }
}
