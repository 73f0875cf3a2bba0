use clap::Parser;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

use list_filter::config::AppConfig;
use list_filter::logging::init_tracing;
use list_filter::startup::build_router;

#[derive(Parser, Debug)]
#[command(name = "list-filter")]
#[command(about = "Translates media-library list filters into backend query payloads")]
struct Args {
    /// Configuration file path (default: config.yaml)
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Port to listen on (overrides config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Host to bind to (overrides config file)
    #[arg(long)]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Fall back to defaults only when the default config file is absent
    let (mut app_config, using_defaults) =
        if args.config == "config.yaml" && !Path::new("config.yaml").exists() {
            (AppConfig::default_config(), true)
        } else {
            (AppConfig::load_from_file(&args.config)?, false)
        };

    if let Some(port) = args.port {
        app_config.server.port = port;
    }
    if let Some(host) = args.host {
        app_config.server.host = host;
    }

    init_tracing(&app_config.logging.level);

    if using_defaults {
        warn!("No config.yaml found, using default configuration");
    } else {
        info!(config = %args.config, "Configuration loaded");
    }

    let host: std::net::IpAddr = app_config.server.host.parse().unwrap_or_else(|_| {
        warn!(
            "Invalid host address: {}, using 127.0.0.1",
            app_config.server.host
        );
        [127, 0, 0, 1].into()
    });
    let addr = SocketAddr::from((host, app_config.server.port));

    info!(
        default_items_per_page = app_config.filter.default_items_per_page,
        max_items_per_page = app_config.filter.max_items_per_page,
        "List filter service listening on {}",
        addr
    );

    let app = build_router(Arc::new(app_config));
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
