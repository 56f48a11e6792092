//! Guild member list factory for `GET /guilds/{guild.id}/members` responses.

use serde_json::{json, Value};

use crate::factory::helpers::next_id;

/// Creates a JSON array of `count` guild members with unique user IDs.
pub fn create_members(count: usize) -> Value {
    let members: Vec<Value> = (0..count)
        .map(|i| {
            json!({
                "user": {
                    "id": next_id(),
                    "username": format!("member{}", i),
                    "discriminator": "0"
                },
                "roles": [],
                "joined_at": "2024-01-01T00:00:00.000000+00:00",
                "deaf": false,
                "mute": false
            })
        })
        .collect();

    Value::Array(members)
}
