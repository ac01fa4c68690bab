use std::{net::SocketAddr, time::Duration};

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub rates_api_url: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("CAMBIO_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .expect("Invalid CAMBIO_LISTEN_ADDR");
        let db_path = std::env::var("CAMBIO_DB_PATH").unwrap_or_else(|_| "./db/cambio.db".into());
        let rates_api_url = std::env::var("CAMBIO_RATES_API_URL")
            .unwrap_or_else(|_| "https://api.exchangerate.host".into());
        let cors_allow = std::env::var("CAMBIO_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("CAMBIO_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        Self {
            listen_addr,
            db_path,
            rates_api_url,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
        }
    }
}
