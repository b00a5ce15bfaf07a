use std::env;

const DEFAULT_ORIGINS: &str = "http://localhost:3000,http://localhost:5173";

/// Browser origins allowed to call the API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    /// Reads the comma separated `ALLOWED_ORIGINS`.
    pub fn from_env() -> Self {
        let origins = env::var("ALLOWED_ORIGINS").unwrap_or_else(|_| DEFAULT_ORIGINS.to_string());
        Self::parse(&origins)
    }

    /// Splits a comma separated origin list, dropping blanks.
    pub fn parse(origins: &str) -> Self {
        Self {
            allowed_origins: origins
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(String::from)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_and_skips_blanks() {
        let config = CorsConfig::parse(" https://a.hei.school , ,https://b.hei.school,");
        assert_eq!(
            config.allowed_origins,
            vec!["https://a.hei.school", "https://b.hei.school"]
        );
    }

    #[test]
    fn test_default_origins() {
        assert_eq!(CorsConfig::parse(DEFAULT_ORIGINS).allowed_origins.len(), 2);
    }
}
