//! Server configuration read from the environment

use anyhow::{Context, Result};
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

const DEFAULT_ADDR: SocketAddr = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 8000));

/// 16 MiB
const DEFAULT_BODY_LIMIT: usize = 16 * 1024 * 1024;

/// Allowed CORS origins
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    /// `PINGPONG_CORS_ORIGINS=*`
    Any,

    /// Explicit comma-separated list
    List(Vec<String>),

    /// Unset: localhost development origins
    Localhost,
}

impl CorsOrigins {
    fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("*") => CorsOrigins::Any,
            Some(origins) => CorsOrigins::List(
                origins
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect(),
            ),
            None => CorsOrigins::Localhost,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (`PINGPONG_ADDR`)
    pub addr: SocketAddr,

    /// CORS policy (`PINGPONG_CORS_ORIGINS`)
    pub cors_origins: CorsOrigins,

    /// Largest accepted request body in bytes (`PINGPONG_BODY_LIMIT`)
    pub body_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR,
            cors_origins: CorsOrigins::Localhost,
            body_limit: DEFAULT_BODY_LIMIT,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_vars(
            std::env::var("PINGPONG_ADDR").ok().as_deref(),
            std::env::var("PINGPONG_CORS_ORIGINS").ok().as_deref(),
            std::env::var("PINGPONG_BODY_LIMIT").ok().as_deref(),
        )
    }

    fn from_vars(
        addr: Option<&str>,
        cors_origins: Option<&str>,
        body_limit: Option<&str>,
    ) -> Result<Self> {
        let addr = match addr {
            Some(addr) => addr
                .parse()
                .with_context(|| format!("Invalid PINGPONG_ADDR: {}", addr))?,
            None => DEFAULT_ADDR,
        };

        let body_limit = match body_limit {
            Some(limit) => limit
                .parse()
                .with_context(|| format!("Invalid PINGPONG_BODY_LIMIT: {}", limit))?,
            None => DEFAULT_BODY_LIMIT,
        };

        Ok(Self {
            addr,
            cors_origins: CorsOrigins::parse(cors_origins),
            body_limit,
        })
    }
}
