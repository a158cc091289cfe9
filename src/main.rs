use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::ServerConfig;

/// Main entry point for the ECOG Performance Status recorder
///
/// Serves the assessment form, the JSON API and Swagger UI from a single HTTP server.
///
/// # Environment Variables
/// - `ECOG_REST_ADDR`: server address (default: "0.0.0.0:3000")
/// - `RUST_LOG`: tracing filter directives
///
/// A `.env` file in the working directory is loaded first if present.
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - `ECOG_REST_ADDR` is not a valid socket address, or
/// - the server fails to bind or run.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("ecog_run=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;
    tracing::info!("-- Starting ECOG recorder on {}", config.addr());

    api_rest::serve(config).await
}
