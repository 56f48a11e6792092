use super::*;

/// Tests the server list without a token.
///
/// Expected: empty list with configuration message, zero requests
#[tokio::test]
async fn empty_without_token() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let config = Config::from_test_context(&test);
    let client = reqwest::Client::new();

    let list = DiscordStatusService::new(&client, &config).servers().await;

    assert!(list.servers.is_empty());
    assert_eq!(list.message.as_deref(), Some("Bot configuration not found"));
    assert_eq!(list.count, None);
    assert_eq!(list.success, None);
    assert_eq!(test.request_count(), 0);

    Ok(())
}

/// Tests mapping of the bot's guilds.
///
/// Verifies icon URLs are built on the CDN for guilds with an icon and are
/// `None` otherwise, and that missing member counts become "N/A".
///
/// Expected: two servers, count 2, success true
#[tokio::test]
async fn maps_guilds_to_servers() -> Result<(), TestError> {
    let with_icon = factory::user_guild::UserGuildFactory::new()
        .id("111")
        .name("Akane's Room")
        .icon(Some("a1b2c3d4e5f60718293a4b5c6d7e8f90"))
        .approximate_member_count(Some(42))
        .build();
    let without_icon = factory::user_guild::create_user_guild("222", "Koharu's Room", None);

    let test = TestBuilder::new()
        .with_discord_credentials()
        .with_current_user_guilds(serde_json::json!([with_icon, without_icon]))
        .build()
        .await?;
    let config = Config::from_test_context(&test);
    let client = reqwest::Client::new();

    let list = DiscordStatusService::new(&client, &config).servers().await;

    assert_eq!(list.count, Some(2));
    assert_eq!(list.success, Some(true));
    assert_eq!(list.message, None);

    let first = &list.servers[0];
    assert_eq!(first.id, "111");
    assert_eq!(first.name, "Akane's Room");
    assert_eq!(
        first.icon.as_deref(),
        Some("https://cdn.discordapp.com/icons/111/a1b2c3d4e5f60718293a4b5c6d7e8f90.png")
    );
    assert_eq!(first.member_count, CountValue::Count(42));

    let second = &list.servers[1];
    assert_eq!(second.icon, None);
    assert_eq!(second.member_count, CountValue::text("N/A"));

    Ok(())
}

/// Tests an empty guild list.
///
/// Expected: no servers, count 0, success true
#[tokio::test]
async fn no_guilds_is_still_success() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_discord_credentials()
        .with_current_user_guilds(serde_json::json!([]))
        .build()
        .await?;
    let config = Config::from_test_context(&test);
    let client = reqwest::Client::new();

    let list = DiscordStatusService::new(&client, &config).servers().await;

    assert!(list.servers.is_empty());
    assert_eq!(list.count, Some(0));
    assert_eq!(list.success, Some(true));

    Ok(())
}

/// Tests the server list when Discord rejects the request.
///
/// Expected: empty list with retrieval failure message
#[tokio::test]
async fn empty_when_request_rejected() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_discord_credentials()
        .with_status("/users/@me/guilds", StatusCode::INTERNAL_SERVER_ERROR)
        .build()
        .await?;
    let config = Config::from_test_context(&test);
    let client = reqwest::Client::new();

    let list = DiscordStatusService::new(&client, &config).servers().await;

    assert!(list.servers.is_empty());
    assert_eq!(
        list.message.as_deref(),
        Some("failed to retrieve server information")
    );
    assert_eq!(list.success, None);

    Ok(())
}

/// Tests the server list when Discord cannot be reached.
///
/// Expected: empty list with the transport error text
#[tokio::test]
async fn empty_with_error_text_when_unreachable() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_discord_credentials()
        .with_unreachable_api()
        .build()
        .await?;
    let config = Config::from_test_context(&test);
    let client = reqwest::Client::new();

    let list = DiscordStatusService::new(&client, &config).servers().await;

    assert!(list.servers.is_empty());
    assert!(list.message.is_some_and(|m| !m.is_empty()));

    Ok(())
}
