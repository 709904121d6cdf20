//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use crate::outbound::persistence::DbPool;

/// Configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) pool: DbPool,
}

impl ServerConfig {
    /// Construct a server configuration from a bind address and a ready pool.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, pool: DbPool) -> Self {
        Self { bind_addr, pool }
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
