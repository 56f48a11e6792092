//! Current user factory for `GET /users/@me` responses.

use serde_json::{json, Value};

/// Creates the bot's own user record.
///
/// # Arguments
/// - `id` - User snowflake as string
/// - `username` - Bot username
pub fn create_current_user(id: &str, username: &str) -> Value {
    json!({
        "id": id,
        "username": username,
        "discriminator": "0",
        "global_name": null,
        "avatar": null,
        "bot": true,
        "verified": true,
        "flags": 0
    })
}
