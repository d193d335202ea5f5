pub mod config;
pub mod routes;

use axum::http::{header, HeaderValue, Method};
use axum_governor::GovernorLayer;
use lazy_limit::{init_rate_limiter, Duration, RuleConfig};
use log::{debug, info, warn};
use real::RealIpLayer;
use std::net::SocketAddr;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::ApiConfig;

fn build_cors_layer(origin: Option<&str>) -> Result<CorsLayer, Box<dyn std::error::Error>> {
    let allow_origin = match origin {
        Some(origin) => AllowOrigin::exact(
            HeaderValue::from_str(origin).map_err(|e| format!("Invalid API_CORS_ORIGIN: {e}"))?,
        ),
        None => AllowOrigin::from(Any),
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]))
}

fn install_crypto_provider() {
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        debug!("rustls crypto provider already installed");
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is fine; the process environment still applies.
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    let config = ApiConfig::from_env();
    edu_core::initialize_logger(config.log_level, config.log_file.as_deref())?;

    info!(
        "Rank API starting (level={}, logfile={}, dotenv={})",
        config.log_level,
        config.log_file.as_deref().unwrap_or("none"),
        dotenv_loaded
    );

    // 10 req/s per client
    init_rate_limiter!(
        default: RuleConfig::new(Duration::seconds(1), 10)
    )
    .await;
    info!("Rate limiter initialized: 10 req/s");

    let cors = build_cors_layer(config.cors_origin.as_deref())?;
    if config.cors_origin.is_none() {
        warn!("API_CORS_ORIGIN not set; accepting requests from any origin");
    }

    let app = routes::router()
        .layer(cors)
        .layer(GovernorLayer::default())
        .layer(RealIpLayer::default());

    let bind_address = config.bind_address();
    info!("Listening on {}", bind_address);

    match &config.tls {
        Some(tls) => {
            info!("HTTPS enabled (cert={}, key={})", tls.cert, tls.key);
            install_crypto_provider();

            let tls_config =
                axum_server::tls_rustls::RustlsConfig::from_pem_file(&tls.cert, &tls.key)
                    .await
                    .map_err(|e| format!("Failed to load TLS cert/key: {e}"))?;
            let addr: SocketAddr = bind_address
                .parse()
                .map_err(|e| format!("Invalid bind address: {e}"))?;
            axum_server::bind_rustls(addr, tls_config)
                .serve(app.into_make_service_with_connect_info::<SocketAddr>())
                .await?;
        }
        None => {
            warn!("API is running WITHOUT TLS; set API_TLS_CERT and API_TLS_KEY to enable HTTPS");
            let listener = tokio::net::TcpListener::bind(&bind_address).await?;
            axum::serve(
                listener,
                app.into_make_service_with_connect_info::<SocketAddr>(),
            )
            .await?;
        }
    }

    info!("Server shutdown");
    Ok(())
}
