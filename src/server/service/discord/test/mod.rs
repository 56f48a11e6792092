use reqwest::StatusCode;
use test_utils::{builder::TestBuilder, error::TestError, factory, TEST_GUILD_ID};

use crate::{
    model::discord::{BotState, CountValue},
    server::{config::Config, service::discord::DiscordStatusService},
};

mod server;
