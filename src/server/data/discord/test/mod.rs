use reqwest::StatusCode;
use test_utils::{builder::TestBuilder, error::TestError, factory, TEST_BOT_TOKEN, TEST_GUILD_ID};

use crate::server::{data::discord::DiscordApiRepository, error::discord::DiscordError};
