use lazy_static::lazy_static;
use regex::Regex;
use tracing::{info, warn};

use crate::auth::{
    password::{hash_password, verify_password},
    repo::UserStore,
    repo_types::{NewUser, User},
};
use crate::error::{ApiError, ApiResult};

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

pub(crate) fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Registers a user, failing with `AlreadyExists` when the email is taken.
///
/// The existence check and the insert are separate statements, so two
/// concurrent registrations with the same email can both succeed.
pub async fn create_user(
    users: &dyn UserStore,
    name: &str,
    email: &str,
    twitter_url: &str,
    password: &str,
) -> ApiResult<User> {
    let email = normalize_email(email);

    if users.find_by_email(&email).await?.is_some() {
        warn!(email = %email, "email already registered");
        return Err(ApiError::AlreadyExists(
            "User with this email already exists".into(),
        ));
    }

    let password_hash = hash_password(password)?;
    let user = users
        .insert(NewUser {
            name: name.trim().to_string(),
            email,
            twitter_url: twitter_url.trim().to_string(),
            password_hash,
        })
        .await?;

    info!(user_id = %user.id, email = %user.email, "user registered");
    Ok(user)
}

/// Looks up a user by email and checks the password. `None` on any mismatch.
pub async fn authenticate(
    users: &dyn UserStore,
    email: &str,
    password: &str,
) -> ApiResult<Option<User>> {
    let email = normalize_email(email);
    let Some(user) = users.find_by_email(&email).await? else {
        warn!(email = %email, "login unknown email");
        return Ok(None);
    };
    if !verify_password(password, &user.password_hash)? {
        warn!(email = %email, user_id = %user.id, "login invalid password");
        return Ok(None);
    }
    Ok(Some(user))
}
