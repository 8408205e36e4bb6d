use std::env;

/// Runtime configuration, loaded once at startup.
///
/// The JWT signing secret is deliberately part of this struct rather than read
/// from the environment at call sites: the process refuses to start without it,
/// and after startup it is read-only shared state.
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub token_ttl_minutes: i64,
    pub server_port: u16,
    pub server_host: String,
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            jwt_secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
            token_ttl_minutes: env::var("TOKEN_TTL_MINUTES")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .expect("TOKEN_TTL_MINUTES must be a number"),
            server_port: env::var("SERVER_PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("SERVER_PORT must be a number"),
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .expect("REQUEST_TIMEOUT_SECS must be a number"),
        }
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.server_host, self.server_port)
    }
}
