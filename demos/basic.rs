//! Basic usage example

use envbind::Configuration;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default, Configuration)]
pub struct Config {
    // Nested section: HTTP_PORT
    pub http: Http,

    // Nested section: LOGGING_LEVEL
    pub logging: Logging,

    // Top-level flag: DEBUG
    pub debug: bool,
}

#[derive(Debug, Default, Configuration)]
pub struct Http {
    pub port: u16,
}

#[derive(Debug, Default, Configuration)]
pub struct Logging {
    pub level: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Set environment variables for demonstration
    std::env::set_var("HTTP_PORT", "3000");
    std::env::set_var("DEBUG", "1");

    // Defaults come from the value being bound
    let mut config = Config {
        logging: Logging {
            level: "info".to_string(),
        },
        ..Config::default()
    };
    envbind::bind_env(&mut config, "")?;

    println!("Configuration loaded:");
    println!("  HTTP Port: {}", config.http.port);
    println!("  Log Level: {}", config.logging.level);
    println!("  Debug: {}", config.debug);

    Ok(())
}
