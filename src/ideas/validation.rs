//! Field rules for new listings. Checks run in a fixed order and the first
//! failure is reported.

use std::collections::HashSet;

use crate::error::{ApiError, ApiResult};
use crate::ideas::dto::CreateIdeaRequest;
use crate::ideas::types::{Category, Chain};

pub const PREVIEW_WORDS: usize = 150;
pub const FULL_CONTENT_WORDS: usize = 3000;
pub const MIN_CATEGORIES: usize = 1;
pub const MAX_CATEGORIES: usize = 3;

const DEFAULT_SELLER_NAME: &str = "Anonymous";

/// A listing that passed every field rule but has not been rated yet.
#[derive(Debug, Clone)]
pub struct ValidListing {
    pub title: String,
    pub image: String,
    pub categories: Vec<Category>,
    pub preview: String,
    pub full_content: String,
    pub price: f64,
    pub seller_wallet_address: String,
    pub preferred_chain: Chain,
    pub seller_name: String,
    pub seller_twitter: String,
}

/// Counts runs of non-whitespace characters.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

fn required(field: Option<String>) -> ApiResult<String> {
    match field {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ApiError::validation("All fields are required")),
    }
}

pub fn validate(req: CreateIdeaRequest) -> ApiResult<ValidListing> {
    let title = required(req.title)?;
    let image = required(req.image)?;
    // An empty list counts as present; its size is checked with the other category rules.
    let raw_categories = req
        .categories
        .ok_or_else(|| ApiError::validation("All fields are required"))?;
    let preview = required(req.preview)?;
    let full_content = required(req.full_content)?;
    let price = req
        .price
        .ok_or_else(|| ApiError::validation("All fields are required"))?;

    let categories = parse_categories(&raw_categories)?;

    if word_count(&preview) != PREVIEW_WORDS {
        return Err(ApiError::validation(format!(
            "Preview must be exactly {PREVIEW_WORDS} words"
        )));
    }
    if word_count(&full_content) != FULL_CONTENT_WORDS {
        return Err(ApiError::validation(format!(
            "Full content must be exactly {FULL_CONTENT_WORDS} words"
        )));
    }

    if !price.is_finite() || price <= 0.0 {
        return Err(ApiError::validation("Price must be greater than 0"));
    }

    // Blank addresses are rejected; accepted ones are stored as sent.
    let seller_wallet_address = req
        .seller_wallet_address
        .filter(|w| !w.trim().is_empty())
        .ok_or_else(|| ApiError::validation("Wallet address is required"))?;

    let preferred_chain = req
        .preferred_chain
        .as_deref()
        .and_then(|c| c.parse::<Chain>().ok())
        .ok_or_else(|| ApiError::validation("Valid preferred chain is required"))?;

    let seller_name = req
        .seller_name
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_SELLER_NAME.to_string());
    let seller_twitter = req.seller_twitter.unwrap_or_default();

    Ok(ValidListing {
        title,
        image,
        categories,
        preview,
        full_content,
        price,
        seller_wallet_address,
        preferred_chain,
        seller_name,
        seller_twitter,
    })
}

fn parse_categories(raw: &[String]) -> ApiResult<Vec<Category>> {
    if raw.len() < MIN_CATEGORIES || raw.len() > MAX_CATEGORIES {
        return Err(ApiError::validation(format!(
            "Must select between {MIN_CATEGORIES} and {MAX_CATEGORIES} categories"
        )));
    }
    let mut seen = HashSet::with_capacity(raw.len());
    let mut out = Vec::with_capacity(raw.len());
    for value in raw {
        let category = value
            .parse::<Category>()
            .map_err(|_| ApiError::validation(format!("Invalid category: {value}")))?;
        if !seen.insert(category) {
            return Err(ApiError::validation("Categories must be unique"));
        }
        out.push(category);
    }
    Ok(out)
}
