//! Example demonstrating a key prefix

use envbind::Configuration;

#[derive(Debug, Default, Configuration)]
pub struct Config {
    // Keys are prefixed: MYAPP_DATABASE_URL, MYAPP_PORT, MYAPP_DATABASE_POOL_SIZE
    pub database_url: String,
    pub port: u16,
    pub database: Database,
}

#[derive(Debug, Default, Configuration)]
pub struct Database {
    pub pool_size: u32,
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("MYAPP_DATABASE_URL", "postgres://localhost/db");
    std::env::set_var("MYAPP_PORT", "8080");
    std::env::set_var("MYAPP_DATABASE_POOL_SIZE", "16");

    let config = Config::from_env("MYAPP")?;

    println!("Configuration with prefix 'MYAPP':");
    println!("  Database URL: {}", config.database_url);
    println!("  Port: {}", config.port);
    println!("  Pool Size: {}", config.database.pool_size);

    Ok(())
}
