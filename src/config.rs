use anyhow::{Context, Result};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
}
impl Config {
    /// Reads `HOST` and `PORT`, loading a `.env` file first when present.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_vars(std::env::var("HOST").ok(), std::env::var("PORT").ok())
    }

    fn from_vars(host: Option<String>, port: Option<String>) -> Result<Self> {
        let host = host.unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match port {
            Some(port) => port
                .parse()
                .with_context(|| format!("invalid PORT value {:?}", port))?,
            None => DEFAULT_PORT,
        };
        Ok(Self { host, port })
    }

    // host names are resolved by the listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
