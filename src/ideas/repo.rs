use anyhow::Context;
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::ideas::repo_types::IdeaRow;
use crate::ideas::types::{Idea, IdeaStatus, NewIdea};

#[async_trait]
pub trait IdeaStore: Send + Sync {
    async fn insert(&self, idea: NewIdea) -> anyhow::Result<Idea>;
    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Idea>>;
}

const IDEA_COLUMNS: &str = r#"
    id, title, image, categories, preview, full_content, price,
    seller_id, seller_name, seller_twitter, seller_wallet_address, preferred_chain,
    seller_ideas_sold, sales_count,
    ai_originality, ai_use_case_value, ai_category_match,
    status, created_at
"#;

#[derive(Clone)]
pub struct PgIdeaStore {
    db: PgPool,
}

impl PgIdeaStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl IdeaStore for PgIdeaStore {
    async fn insert(&self, idea: NewIdea) -> anyhow::Result<Idea> {
        let categories: Vec<String> = idea
            .categories
            .iter()
            .map(|c| c.as_str().to_string())
            .collect();

        let sql = format!(
            r#"
            INSERT INTO ideas (
                id, title, image, categories, preview, full_content, price,
                seller_id, seller_name, seller_twitter, seller_wallet_address, preferred_chain,
                ai_originality, ai_use_case_value, ai_category_match, status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            RETURNING {IDEA_COLUMNS}
            "#
        );
        let row = sqlx::query_as::<_, IdeaRow>(&sql)
            .bind(Uuid::new_v4())
            .bind(&idea.title)
            .bind(&idea.image)
            .bind(&categories)
            .bind(&idea.preview)
            .bind(&idea.full_content)
            .bind(idea.price)
            .bind(idea.seller_id)
            .bind(&idea.seller_name)
            .bind(&idea.seller_twitter)
            .bind(&idea.seller_wallet_address)
            .bind(idea.preferred_chain.as_str())
            .bind(idea.ai_rating.originality)
            .bind(idea.ai_rating.use_case_value)
            .bind(idea.ai_rating.category_match)
            .bind(IdeaStatus::default().as_str())
            .fetch_one(&self.db)
            .await
            .context("insert idea")?;
        Idea::try_from(row)
    }

    async fn find_by_id(&self, id: Uuid) -> anyhow::Result<Option<Idea>> {
        let sql = format!("SELECT {IDEA_COLUMNS} FROM ideas WHERE id = $1");
        let row = sqlx::query_as::<_, IdeaRow>(&sql)
            .bind(id)
            .fetch_optional(&self.db)
            .await
            .context("find idea by id")?;
        row.map(Idea::try_from).transpose()
    }
}
