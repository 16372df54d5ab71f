//! Node configuration, read from command-line flags with environment
//! variable fallbacks.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_BIND: &str = "127.0.0.1:3000";

#[derive(Debug, Clone, Parser)]
#[command(name = "mini-search", about = "Full-text lookup over a fixed in-memory corpus")]
pub struct Config {
    /// Address the HTTP server listens on
    #[arg(short, long, env = "MINI_SEARCH_BIND", default_value = DEFAULT_BIND)]
    pub bind: SocketAddr,

    /// JSON file with the documents to serve (built-in corpus when omitted)
    #[arg(short, long, env = "MINI_SEARCH_CORPUS")]
    pub corpus: Option<PathBuf>,
}
