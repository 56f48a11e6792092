mod model;
mod server;

use tokio::net::TcpListener;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;
    startup::check_discord_config(&config);

    let http_client = startup::setup_reqwest_client()?;
    let addr = config.listen_addr();
    let port = config.port;

    let app = router::router(AppState::new(config, http_client));

    let listener = TcpListener::bind(&addr).await?;

    tracing::info!("Server is running on {}", addr);
    tracing::info!("Access the website at: http://localhost:{}", port);

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}
