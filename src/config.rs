// src/config.rs
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Parser;

use crate::services::chatbot::ReplyMode;

pub const DEFAULT_PORT: u16 = 3002;
pub const DEFAULT_LOG_FILTER: &str = "chat_echo_server=info,tower_http=info";

/// Command-line and environment configuration. A `.env` file is read
/// before parsing, so its entries act as environment fallbacks.
#[derive(Debug, Clone, Parser)]
#[command(name = "chat-echo-server", version, about = "Serves the /chat echo endpoint")]
pub struct ServerConfig {
    /// Address to bind to.
    #[arg(long, env = "CHAT_HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Port to listen on; 0 lets the OS pick a free one.
    #[arg(short, long, env = "CHAT_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Reply transform.
    #[arg(short, long, env = "CHAT_MODE", value_enum, default_value_t = ReplyMode::Reverse)]
    pub mode: ReplyMode,

    /// Tracing filter, e.g. `debug` or `chat_echo_server=trace`.
    /// Falls back to RUST_LOG.
    #[arg(long, env = "CHAT_LOG")]
    pub log_level: Option<String>,
}

impl ServerConfig {
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
