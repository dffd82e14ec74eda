use clap::Parser;

pub const DEFAULT_PORT: u16 = 8083;

/// BN256 G1 compute service
#[derive(Parser, Debug, Clone)]
#[command(name = "bn256-server")]
#[command(about = "HTTP service for BN256 G1 arithmetic, commitments and Schnorr signatures")]
#[command(version)]
pub struct Config {
    /// Address the HTTP listener binds to
    #[arg(long, env = "BN256_BIND_ADDRESS", default_value = "0.0.0.0")]
    pub bind_address: String,

    /// Port the HTTP listener binds to
    #[arg(short, long, env = "BN256_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Number of worker threads, defaults to the number of physical cores
    #[arg(short, long, env = "BN256_WORKERS")]
    pub workers: Option<usize>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, env = "BN256_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}
