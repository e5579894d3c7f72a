use clap::Parser;

/// Runtime settings, from flags or the environment.
#[derive(Debug, Clone, Parser)]
#[command(name = "janken", about = "Rock-paper-scissors match server")]
pub struct Config {
    /// Address to listen on.
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0:8080")]
    pub bind: String,
    /// PostgreSQL URL. Matches are kept in memory when unset.
    #[arg(long, env = "DB_URL")]
    pub db_url: Option<String>,
    /// Greeting served on `GET /`.
    #[arg(long, env = "GREETING", default_value = "Ciao")]
    pub greeting: String,
    /// HTTP worker threads.
    #[arg(long, env = "WORKERS", default_value_t = 4)]
    pub workers: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let config = Config::parse_from([
            "janken",
            "--bind",
            "127.0.0.1:9000",
            "--greeting",
            "Hello",
            "--workers",
            "2",
        ]);
        assert_eq!(config.bind, "127.0.0.1:9000");
        assert_eq!(config.greeting, "Hello");
        assert_eq!(config.workers, 2);
    }
}
