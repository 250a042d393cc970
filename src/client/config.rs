use crate::client::error::Error;

/// Host serving the VisionTrack REST API when no override is set at build time
pub const DEFAULT_API_URL: &str = "https://premier-paula-evolvoria-acf84abc.koyeb.app";

/// Build time variable overriding [`DEFAULT_API_URL`]
pub const API_URL_VAR: &str = "VISIONTRACK_API_URL";

const ROLE_LOOKUP_PATH: &str = "/core/api/user-role/";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub api_url: String,
}

impl Config {
    /// Creates a config for the given API base URL.
    ///
    /// Trailing slashes are stripped so endpoint paths can be appended directly.
    ///
    /// # Returns
    /// - `Ok(Config)` - URL uses the `http` or `https` scheme
    /// - `Err(Error::InvalidConfigValue)` - URL is empty or uses another scheme
    pub fn new(api_url: &str) -> Result<Self, Error> {
        let api_url = api_url.trim().trim_end_matches('/');

        if !(api_url.starts_with("https://") || api_url.starts_with("http://")) {
            return Err(Error::InvalidConfigValue {
                var: API_URL_VAR.to_string(),
                reason: format!("expected an http(s) URL, got {:?}", api_url),
            });
        }

        Ok(Self {
            api_url: api_url.to_string(),
        })
    }

    /// Reads the API base URL baked in at build time.
    ///
    /// The WASM bundle has no process environment, so the variable is captured by
    /// `option_env!` when the client is compiled.
    pub fn from_env() -> Result<Self, Error> {
        Self::new(option_env!("VISIONTRACK_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    /// URL of the endpoint returning the signed in user's role
    pub fn role_endpoint(&self) -> String {
        format!("{}{}", self.api_url, ROLE_LOOKUP_PATH)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Expect the role endpoint to be appended to the base URL without doubled slashes
    #[test]
    fn builds_role_endpoint() {
        let config = Config::new("https://api.example.com/").unwrap();

        assert_eq!(config.api_url, "https://api.example.com");
        assert_eq!(
            config.role_endpoint(),
            "https://api.example.com/core/api/user-role/"
        );
    }

    /// Expect the default config to point at the production host
    #[test]
    fn default_uses_production_host() {
        let config = Config::default();

        assert_eq!(
            config.role_endpoint(),
            "https://premier-paula-evolvoria-acf84abc.koyeb.app/core/api/user-role/"
        );
    }

    /// Expect Err for URLs without an http(s) scheme
    #[test]
    fn rejects_invalid_url() {
        let result = Config::new("ftp://api.example.com");
        assert!(matches!(result, Err(Error::InvalidConfigValue { .. })));

        let result = Config::new("   ");
        assert!(matches!(result, Err(Error::InvalidConfigValue { .. })));
    }
}
