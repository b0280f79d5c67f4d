#[derive(Clone, Debug)]
pub struct WaitlistConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub bind_addr: String,
}

impl WaitlistConfig {
    pub fn from_env() -> Self {
        // the database file lives alongside the running process unless
        // DATABASE_URL says otherwise
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite://waitlist.db".to_string());

        let max_connections = std::env::var("MAX_CONNECTIONS")
            .ok()
            .and_then(|val| val.parse::<u32>().ok())
            .unwrap_or(5);

        let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        Self {
            database_url,
            max_connections,
            bind_addr,
        }
    }
}
