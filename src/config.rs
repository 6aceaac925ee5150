use crate::stock;

/// Deployment settings for the stock service endpoint.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        let api_base_url =
            std::env::var("STOCKROOM_API_URL").expect("STOCKROOM_API_URL must be set");

        Self { api_base_url }
    }

    /// Stock service client pointed at the configured endpoint.
    pub fn stock_client(&self) -> stock::Client {
        stock::Client::new(self.api_base_url.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_reads_the_api_url() {
        std::env::set_var("STOCKROOM_API_URL", "https://api.stockroom.test");

        let config = Config::from_env();

        assert_eq!(config.api_base_url, "https://api.stockroom.test");
    }
}
