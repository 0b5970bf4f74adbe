//! Startup seeding.
//!
//! The demo user used to be a module-scope singleton in the original
//! dashboard; here it is seeded explicitly once, after the store is
//! constructed and before the server starts accepting requests.

use lineage_db::models::user::CreateUser;
use lineage_db::store::Store;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};

/// Username of the seeded demo account.
pub const DEMO_USERNAME: &str = "demo";

/// Create the demo user unless one already exists.
pub async fn seed_demo_user(store: &dyn Store, password: &str) -> AppResult<()> {
    if store.find_user_by_username(DEMO_USERNAME).await?.is_some() {
        return Ok(());
    }

    let password_hash = hash_password(password)
        .map_err(|e| AppError::InternalError(format!("Failed to hash demo password: {e}")))?;

    let user = store
        .create_user(&CreateUser {
            username: DEMO_USERNAME.to_string(),
            password_hash,
        })
        .await?;

    tracing::info!(user_id = user.id, username = DEMO_USERNAME, "Seeded demo user");
    Ok(())
}
