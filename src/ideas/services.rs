use tracing::{error, info, instrument};
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::ideas::{
    repo::IdeaStore,
    types::{Idea, NewIdea},
    validation::ValidListing,
};
use crate::rating::IdeaRater;

/// Rates a validated listing and stores it. A rating failure aborts before
/// anything is written.
#[instrument(skip_all, fields(%seller_id))]
pub async fn create_idea(
    ideas: &dyn IdeaStore,
    rater: &dyn IdeaRater,
    seller_id: Uuid,
    listing: ValidListing,
) -> ApiResult<Idea> {
    let ai_rating = rater
        .rate(
            &listing.title,
            &listing.preview,
            &listing.full_content,
            &listing.categories,
        )
        .await
        .map_err(|e| {
            error!(error = ?e, "idea rating failed");
            ApiError::ExternalService("Failed to rate idea".into())
        })?;

    let idea = ideas
        .insert(NewIdea {
            title: listing.title,
            image: listing.image,
            categories: listing.categories,
            preview: listing.preview,
            full_content: listing.full_content,
            price: listing.price,
            seller_id,
            seller_name: listing.seller_name,
            seller_twitter: listing.seller_twitter,
            seller_wallet_address: listing.seller_wallet_address,
            preferred_chain: listing.preferred_chain,
            ai_rating,
        })
        .await?;

    info!(idea_id = %idea.id, "idea created");
    Ok(idea)
}

pub async fn find_idea(ideas: &dyn IdeaStore, id: Uuid) -> ApiResult<Idea> {
    ideas
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Idea not found".into()))
}
