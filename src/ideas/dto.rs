use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::ideas::types::{AiRating, Category, Chain, Idea, IdeaStatus};

/// Body of `POST /api/ideas/create`. Everything is optional here so that
/// missing fields produce the workflow's own validation messages.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIdeaRequest {
    pub title: Option<String>,
    pub image: Option<String>,
    pub categories: Option<Vec<String>>,
    pub preview: Option<String>,
    pub full_content: Option<String>,
    pub price: Option<f64>,
    pub seller_wallet_address: Option<String>,
    pub preferred_chain: Option<String>,
    pub seller_name: Option<String>,
    pub seller_twitter: Option<String>,
}

/// Subset of a listing echoed back after creation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedIdea {
    pub id: Uuid,
    pub title: String,
    pub image: String,
    pub categories: Vec<Category>,
    pub preview: String,
    pub price: f64,
    pub ai_rating: AiRating,
    pub status: IdeaStatus,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Serialize)]
pub struct CreateIdeaResponse {
    pub success: bool,
    pub idea: CreatedIdea,
}

/// Full public projection returned by `GET /api/ideas/{id}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaDetails {
    pub id: Uuid,
    pub title: String,
    pub image: String,
    pub categories: Vec<Category>,
    pub preview: String,
    pub full_content: String,
    pub price: f64,
    pub seller_id: Uuid,
    pub seller_name: String,
    pub seller_twitter: String,
    pub seller_wallet_address: String,
    pub preferred_chain: Chain,
    pub seller_ideas_sold: i32,
    pub sales_count: i32,
    pub ai_rating: AiRating,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub status: IdeaStatus,
}

#[derive(Debug, Serialize)]
pub struct IdeaResponse {
    pub idea: IdeaDetails,
}

impl From<Idea> for CreatedIdea {
    fn from(i: Idea) -> Self {
        Self {
            id: i.id,
            title: i.title,
            image: i.image,
            categories: i.categories,
            preview: i.preview,
            price: i.price,
            ai_rating: i.ai_rating,
            status: i.status,
            created_at: i.created_at,
        }
    }
}

impl From<Idea> for IdeaDetails {
    fn from(i: Idea) -> Self {
        Self {
            id: i.id,
            title: i.title,
            image: i.image,
            categories: i.categories,
            preview: i.preview,
            full_content: i.full_content,
            price: i.price,
            seller_id: i.seller_id,
            seller_name: i.seller_name,
            seller_twitter: i.seller_twitter,
            seller_wallet_address: i.seller_wallet_address,
            preferred_chain: i.preferred_chain,
            seller_ideas_sold: i.seller_ideas_sold,
            sales_count: i.sales_count,
            ai_rating: i.ai_rating,
            created_at: i.created_at,
            status: i.status,
        }
    }
}
