use clap::Parser;
use core::time::Duration;
use std::net::SocketAddr;

/// Command-line and environment configuration for the server binary.
///
/// Every flag can also be supplied through the environment (and therefore a
/// local `.env` file loaded at startup).
#[derive(Parser, Debug, Clone)]
#[command(
    name = "lexperm-server",
    version,
    about = "HTTP service streaming lexicographic permutations on demand"
)]
pub struct CliArgs {
    /// Socket address to bind the HTTP listener to.
    #[arg(long, env = "LEXPERM_ADDR", default_value = "0.0.0.0:8080")]
    pub addr: String,

    /// Maximum accepted request body size in bytes.
    #[arg(long, env = "LEXPERM_MAX_BODY_BYTES", default_value_t = 16 * 1024 * 1024)]
    pub max_body_bytes: usize,

    /// Per-request timeout in seconds, covering both read and write.
    #[arg(long, env = "LEXPERM_REQUEST_TIMEOUT_SECS", default_value_t = 5)]
    pub request_timeout_secs: u64,
}

/// Validated runtime configuration derived from [`CliArgs`].
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub max_body_bytes: usize,
    pub request_timeout: Duration,
}

impl TryFrom<CliArgs> for ServerConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        anyhow::ensure!(args.max_body_bytes > 0, "max body size must be non-zero");
        anyhow::ensure!(
            args.request_timeout_secs > 0,
            "request timeout must be non-zero"
        );
        let addr: SocketAddr = args.addr.parse()?;

        Ok(Self {
            addr,
            max_body_bytes: args.max_body_bytes,
            request_timeout: Duration::from_secs(args.request_timeout_secs),
        })
    }
}
