pub mod guild;
pub mod user;

pub use guild::{DiscordGuild, DiscordUserGuild};
pub use user::DiscordCurrentUser;
