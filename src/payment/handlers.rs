//! Landing endpoint the external checkout redirects to. It only echoes the
//! identifiers back with navigation targets; settlement happens elsewhere.

use axum::{extract::Query, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::state::AppState;

const MARKETPLACE_PATH: &str = "/marketplace";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessParams {
    pub idea_id: Option<String>,
    pub checkout_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SuccessLinks {
    pub idea: Option<String>,
    pub marketplace: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessResponse {
    pub message: &'static str,
    pub idea_id: Option<String>,
    pub checkout_id: Option<String>,
    pub links: SuccessLinks,
}

pub fn payment_routes() -> Router<AppState> {
    Router::new().route("/payment/success", get(payment_success))
}

#[instrument]
pub async fn payment_success(Query(params): Query<SuccessParams>) -> Json<SuccessResponse> {
    let idea_id = params.idea_id.filter(|id| !id.trim().is_empty());
    info!(idea_id = ?idea_id, checkout_id = ?params.checkout_id, "payment landing");

    Json(SuccessResponse {
        message: "Payment successful",
        links: SuccessLinks {
            idea: idea_id.as_ref().map(|id| format!("/idea/{id}")),
            marketplace: MARKETPLACE_PATH,
        },
        idea_id,
        checkout_id: params.checkout_id,
    })
}
