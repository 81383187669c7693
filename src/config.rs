use std::env;

/// How client-supplied rental totals are treated on booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TotalValidation {
    /// Trust the client's total verbatim.
    Lenient,
    /// Reject totals below car_price * days. Exact equality is not
    /// required since the driver surcharge is priced by the client.
    Strict,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub server_port: u16,
    pub public_base_url: String,
    pub images_dir: String,
    pub total_validation: TotalValidation,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        let server_port = env::var("SERVER_PORT")
            .or_else(|_| env::var("PORT"))
            .unwrap_or_else(|_| "5001".to_string())
            .parse()
            .unwrap_or(5001);

        Ok(Config {
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| database_url_from_parts()),
            server_port,
            public_base_url: env::var("BACKEND_URL")
                .unwrap_or_else(|_| format!("http://localhost:{}", server_port)),
            images_dir: env::var("IMAGES_DIR").unwrap_or_else(|_| "images".to_string()),
            total_validation: match env::var("TOTAL_VALIDATION").as_deref() {
                Ok("strict") | Ok("STRICT") => TotalValidation::Strict,
                _ => TotalValidation::Lenient,
            },
            log_level: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

// The deployment surface exposes discrete DB_* variables; DATABASE_URL
// takes precedence when set.
fn database_url_from_parts() -> String {
    let host = env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());
    let port = env::var("DB_PORT").unwrap_or_else(|_| "5432".to_string());
    let user = env::var("DB_USER").unwrap_or_else(|_| "postgres".to_string());
    let password = env::var("DB_PASSWORD").unwrap_or_else(|_| "password".to_string());
    let name = env::var("DB_NAME").unwrap_or_else(|_| "rentals".to_string());
    format!("postgresql://{}:{}@{}:{}/{}", user, password, host, port, name)
}
