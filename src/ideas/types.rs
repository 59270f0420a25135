use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown {kind}: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal,
        { $($(#[$vmeta:meta])* $variant:ident => $s:literal),+ $(,)? }
    ) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        $(#[$meta])*
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $s),+
                }
            }
        }

        impl FromStr for $name {
            type Err = UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok($name::$variant),)+
                    other => Err(UnknownVariant {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

string_enum!(Category, "category", {
    Ai => "ai",
    Blockchain => "blockchain",
    Defi => "defi",
    Nft => "nft",
    Gaming => "gaming",
    Social => "social",
    Fintech => "fintech",
    Health => "health",
    Education => "education",
    Productivity => "productivity",
    Other => "other",
});

// Settlement networks a seller can ask to be paid on.
string_enum!(Chain, "chain", {
    Ethereum => "ethereum",
    Polygon => "polygon",
    Arbitrum => "arbitrum",
    Optimism => "optimism",
    Sepolia => "sepolia",
});

string_enum!(#[derive(Default)] IdeaStatus, "status", {
    #[default]
    Active => "active",
    Sold => "sold",
    Archived => "archived",
});

/// Scores produced by the rating service, each on a 1-10 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiRating {
    pub originality: f64,
    pub use_case_value: f64,
    pub category_match: f64,
}

#[derive(Debug, Clone)]
pub struct Idea {
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
    pub created_at: OffsetDateTime,
    pub status: IdeaStatus,
}

/// A validated, rated listing ready to be persisted.
#[derive(Debug, Clone)]
pub struct NewIdea {
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
    pub ai_rating: AiRating,
}
