//! Server configuration

use std::net::{IpAddr, SocketAddr};

/// Errors resolving a [`ServerConfig`] into a bind address
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid host address: {0}")]
    InvalidHost(String),
}

/// Server configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl ServerConfig {
    /// Resolve host and port into the socket address to listen on.
    ///
    /// Only IP literals are accepted; hostnames are not resolved.
    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|_| ConfigError::InvalidHost(self.host.clone()))?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_binds_all_interfaces_on_8000() {
        let addr = ServerConfig::default().bind_addr().unwrap();
        assert_eq!(addr, SocketAddr::from(([0, 0, 0, 0], 8000)));
    }

    #[test]
    fn test_ipv6_host() {
        let config = ServerConfig {
            host: "::1".to_string(),
            port: 9000,
        };

        let addr = config.bind_addr().unwrap();
        assert!(addr.is_ipv6());
        assert_eq!(addr.port(), 9000);
    }

    #[test]
    fn test_hostname_rejected() {
        let config = ServerConfig {
            host: "localhost".to_string(),
            ..ServerConfig::default()
        };

        let err = config.bind_addr().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidHost(ref h) if h == "localhost"));
        assert_eq!(err.to_string(), "Invalid host address: localhost");
    }
}
