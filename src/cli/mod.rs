use crate::{
    web::{self, AppState},
    PlannerConfig, TripPlanner,
};
use anyhow::Context;
use clap::{Arg, Command};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// CLI entry point: load configuration and serve the planner page
pub async fn run() -> anyhow::Result<()> {
    // Load environment variables from .env file
    let mut config = PlannerConfig::from_env()?;
    init_logging();

    let matches = Command::new("itinerary-planner")
        .version("0.1.0")
        .about("Serve a trip form that builds day-by-day itineraries with Gemini")
        .arg(
            Arg::new("bind")
                .short('b')
                .long("bind")
                .value_name("ADDRESS")
                .help("Address to listen on (or set PLANNER_BIND_ADDRESS)"),
        )
        .arg(
            Arg::new("port")
                .short('p')
                .long("port")
                .value_name("PORT")
                .value_parser(clap::value_parser!(u16))
                .help("Port to listen on (or set PLANNER_PORT)"),
        )
        .arg(
            Arg::new("model")
                .short('m')
                .long("model")
                .value_name("MODEL")
                .help("Gemini model name (or set GEMINI_MODEL)"),
        )
        .arg(
            Arg::new("base-url")
                .short('u')
                .long("base-url")
                .value_name("URL")
                .help("Gemini API base URL (or set GEMINI_BASE_URL)"),
        )
        .get_matches();

    if let Some(bind) = matches.get_one::<String>("bind") {
        config.bind_address = bind.clone();
    }
    if let Some(port) = matches.get_one::<u16>("port") {
        config.port = *port;
    }
    if let Some(model) = matches.get_one::<String>("model") {
        config.model = model.clone();
    }
    if let Some(base_url) = matches.get_one::<String>("base-url") {
        config.base_url = base_url.clone();
    }

    if !config.has_api_key() {
        warn!("GEMINI_API_KEY is not set; every plan request will show the configuration error");
    }
    info!("Using model: {}", config.model);
    info!("Base URL: {}", config.base_url);

    let state = AppState::new(TripPlanner::new(&config))?;
    let address = config.listen_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;

    web::serve(listener, state).await?;
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
