//! Application State and Configuration

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;

use tutor_directory::{BookingLink, Catalog, DirectoryError, Result};

const DEFAULT_BIND_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 3000);

/// Server configuration, read from the environment
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Listen address
    pub bind_addr: SocketAddr,

    /// Directory holding the built front end
    pub static_dir: PathBuf,

    /// JSON catalog file; `None` serves the embedded catalog
    pub catalog_path: Option<PathBuf>,

    /// Outbound booking deep link
    pub booking: BookingLink,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR,
            static_dir: PathBuf::from("static"),
            catalog_path: None,
            booking: BookingLink::default(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        let bind_addr = match std::env::var("BIND_ADDR") {
            Ok(raw) => parse_bind_addr(&raw)?,
            Err(_) => DEFAULT_BIND_ADDR,
        };
        let static_dir = std::env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("static"));
        let catalog_path = std::env::var("TUTOR_CATALOG_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            bind_addr,
            static_dir,
            catalog_path,
            booking: BookingLink::from_env()?,
        })
    }
}

fn parse_bind_addr(raw: &str) -> Result<SocketAddr> {
    raw.trim()
        .parse()
        .map_err(|e| DirectoryError::Config(format!("BIND_ADDR {raw:?}: {e}")))
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Validated tutor catalog, loaded once at startup
    pub catalog: Arc<Catalog>,

    /// Where the catalog came from
    pub catalog_source: Arc<str>,

    pub booking: Arc<BookingLink>,
}

impl AppState {
    pub fn new(catalog: Catalog, catalog_source: &str, booking: BookingLink) -> Self {
        Self {
            catalog: Arc::new(catalog),
            catalog_source: Arc::from(catalog_source),
            booking: Arc::new(booking),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_addr_parses() {
        assert_eq!(parse_bind_addr(" 127.0.0.1:8080 ").unwrap().port(), 8080);
        assert_eq!(ServerConfig::default().bind_addr.to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn test_malformed_bind_addr_is_config_error() {
        let err = parse_bind_addr("localhost").unwrap_err();
        assert!(matches!(err, DirectoryError::Config(_)));
        assert_eq!(err.code(), "CONFIG_ERROR");
        assert_eq!(err.user_message(), "Service configuration error.");
    }
}
