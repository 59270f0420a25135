use anyhow::Context;
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::ideas::types::{AiRating, Category, Chain, Idea, IdeaStatus};

/// Row shape of the `ideas` table. Enums are stored as their lowercase names.
#[derive(Debug, FromRow)]
pub struct IdeaRow {
    pub id: Uuid,
    pub title: String,
    pub image: String,
    pub categories: Vec<String>,
    pub preview: String,
    pub full_content: String,
    pub price: f64,
    pub seller_id: Uuid,
    pub seller_name: String,
    pub seller_twitter: String,
    pub seller_wallet_address: String,
    pub preferred_chain: String,
    pub seller_ideas_sold: i32,
    pub sales_count: i32,
    pub ai_originality: f64,
    pub ai_use_case_value: f64,
    pub ai_category_match: f64,
    pub status: String,
    pub created_at: OffsetDateTime,
}

impl TryFrom<IdeaRow> for Idea {
    type Error = anyhow::Error;

    fn try_from(r: IdeaRow) -> Result<Self, Self::Error> {
        let categories = r
            .categories
            .iter()
            .map(|c| c.parse::<Category>())
            .collect::<Result<Vec<_>, _>>()
            .with_context(|| format!("idea {} has a bad category", r.id))?;
        let preferred_chain = r
            .preferred_chain
            .parse::<Chain>()
            .with_context(|| format!("idea {} has a bad chain", r.id))?;
        let status = r
            .status
            .parse::<IdeaStatus>()
            .with_context(|| format!("idea {} has a bad status", r.id))?;

        Ok(Idea {
            id: r.id,
            title: r.title,
            image: r.image,
            categories,
            preview: r.preview,
            full_content: r.full_content,
            price: r.price,
            seller_id: r.seller_id,
            seller_name: r.seller_name,
            seller_twitter: r.seller_twitter,
            seller_wallet_address: r.seller_wallet_address,
            preferred_chain,
            seller_ideas_sold: r.seller_ideas_sold,
            sales_count: r.sales_count,
            ai_rating: AiRating {
                originality: r.ai_originality,
                use_case_value: r.ai_use_case_value,
                category_match: r.ai_category_match,
            },
            created_at: r.created_at,
            status,
        })
    }
}
