//! Example demonstrating optional nested sections and custom sources

use envbind::{Configuration, EnvironSource};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default, Configuration)]
pub struct Config {
    pub name: String,

    // Allocated with defaults when empty, then bound from TLS_*
    pub tls: Option<Box<Tls>>,

    // Not exported, never read from the source
    #[allow(dead_code)]
    secret: String,
}

#[derive(Debug, Default, Configuration)]
pub struct Tls {
    pub enabled: bool,
    pub cert_path: String,
}

#[derive(Debug, Default, Configuration)]
pub struct Limits {
    pub max_conns: u8,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("envbind=trace"))
        .init();

    let source = EnvironSource::from_entries([
        "NAME=edge-proxy",
        "TLS_ENABLED=true",
        "TLS_CERT_PATH=/etc/ssl/edge.pem",
        "SECRET=ignored",
    ]);

    let mut config = Config::default();
    envbind::bind(&mut config, "", &source)?;

    println!("{config:#?}");

    // Invalid values stop binding and name the key
    let limits = EnvironSource::from_entries(["MAX_CONNS=1000"]);
    if let Err(err) = Limits::from_source("", &limits) {
        println!("Rejected: {err}");
    }

    Ok(())
}
