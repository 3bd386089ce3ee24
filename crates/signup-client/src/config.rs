//! Authentication backend client configuration.
//!
//! Defaults point at a locally running backend. Override via environment
//! variables or explicit construction.

use url::Url;

/// Default base URL when `SIGNUP_API_URL` is unset.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080/";

/// Default request timeout when `SIGNUP_TIMEOUT_SECS` is unset.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for connecting to the authentication backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthClientConfig {
    /// Base URL; endpoint paths are resolved relative to it.
    pub base_url: Url,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl AuthClientConfig {
    /// Build a configuration from a base URL string and timeout.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, ConfigError> {
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(timeout_secs.to_string()));
        }
        Ok(Self {
            base_url: parse_base_url("base_url", base_url)?,
            timeout_secs,
        })
    }

    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `SIGNUP_API_URL` (default: `http://127.0.0.1:8080/`)
    /// - `SIGNUP_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with_overrides(None, None)
    }

    /// Like [`from_env`](Self::from_env), but an explicit value replaces
    /// its environment variable, which is then never read.
    pub fn from_env_with_overrides(
        api_url: Option<&str>,
        timeout_secs: Option<u64>,
    ) -> Result<Self, ConfigError> {
        resolve(|var| std::env::var(var).ok(), api_url, timeout_secs)
    }

    /// Create a configuration pointing to a local mock server (for testing).
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidUrl` if the localhost URL cannot be parsed.
    pub fn local_mock(port: u16) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_base_url("localhost", &format!("http://127.0.0.1:{port}"))?,
            timeout_secs: 5,
        })
    }

    /// Resolve `path` (e.g. `"validate/email"`) against the base URL.
    pub fn endpoint(&self, path: &str) -> Result<Url, ConfigError> {
        self.base_url
            .join(path)
            .map_err(|e| ConfigError::InvalidUrl(path.to_string(), e.to_string()))
    }
}

fn resolve(
    lookup: impl Fn(&str) -> Option<String>,
    api_url: Option<&str>,
    timeout_secs: Option<u64>,
) -> Result<AuthClientConfig, ConfigError> {
    let timeout_secs = match timeout_secs {
        Some(0) => return Err(ConfigError::InvalidTimeout("0".to_string())),
        Some(secs) => secs,
        None => match lookup("SIGNUP_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
            None => DEFAULT_TIMEOUT_SECS,
        },
    };

    let base_url = match api_url {
        Some(raw) => parse_base_url("api_url", raw)?,
        None => {
            let raw = lookup("SIGNUP_API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
            parse_base_url("SIGNUP_API_URL", &raw)?
        }
    };

    Ok(AuthClientConfig {
        base_url,
        timeout_secs,
    })
}

/// Parse a base URL, forcing a trailing slash so relative joins append
/// rather than replace the last path segment.
fn parse_base_url(source: &str, raw: &str) -> Result<Url, ConfigError> {
    let mut url =
        Url::parse(raw).map_err(|e| ConfigError::InvalidUrl(source.to_string(), e.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidUrl(
            source.to_string(),
            "URL cannot be used as a base".to_string(),
        ));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
    #[error("invalid timeout {0:?}: expected a positive number of seconds")]
    InvalidTimeout(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_mock_builds_valid_config() {
        let cfg = AuthClientConfig::local_mock(9000).unwrap();
        assert_eq!(cfg.timeout_secs, 5);
        assert_eq!(cfg.base_url.as_str(), "http://127.0.0.1:9000/");
    }

    #[test]
    fn default_base_url_parses() {
        let cfg = AuthClientConfig::new(DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS).unwrap();
        assert_eq!(cfg.base_url.as_str(), "http://127.0.0.1:8080/");
        assert_eq!(cfg.timeout_secs, 30);
    }

    #[test]
    fn base_path_gets_trailing_slash() {
        let cfg = AuthClientConfig::new("https://auth.example.com/api/v1", 10).unwrap();
        assert_eq!(cfg.base_url.as_str(), "https://auth.example.com/api/v1/");
        assert_eq!(
            cfg.endpoint("validate/email").unwrap().as_str(),
            "https://auth.example.com/api/v1/validate/email"
        );
    }

    #[test]
    fn endpoint_appends_to_root() {
        let cfg = AuthClientConfig::local_mock(8080).unwrap();
        assert_eq!(
            cfg.endpoint("register").unwrap().as_str(),
            "http://127.0.0.1:8080/register"
        );
    }

    #[test]
    fn rejects_invalid_url() {
        assert!(matches!(
            AuthClientConfig::new("not a url", 10),
            Err(ConfigError::InvalidUrl(..))
        ));
        assert!(matches!(
            AuthClientConfig::new("mailto:someone@example.com", 10),
            Err(ConfigError::InvalidUrl(..))
        ));
    }

    #[test]
    fn rejects_zero_timeout() {
        assert!(matches!(
            AuthClientConfig::new("http://localhost/", 0),
            Err(ConfigError::InvalidTimeout(_))
        ));
    }

    fn env(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |var: &str| {
            pairs
                .iter()
                .find(|(k, _)| *k == var)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn resolve_uses_defaults_without_env() {
        let cfg = resolve(env(&[]), None, None).unwrap();
        assert_eq!(cfg.base_url.as_str(), DEFAULT_BASE_URL);
        assert_eq!(cfg.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn resolve_reads_env() {
        let vars = env(&[
            ("SIGNUP_API_URL", "https://auth.example.com/v1"),
            ("SIGNUP_TIMEOUT_SECS", " 12 "),
        ]);
        let cfg = resolve(vars, None, None).unwrap();
        assert_eq!(cfg.base_url.as_str(), "https://auth.example.com/v1/");
        assert_eq!(cfg.timeout_secs, 12);
    }

    #[test]
    fn resolve_rejects_bad_env_timeout() {
        let result = resolve(env(&[("SIGNUP_TIMEOUT_SECS", "soon")]), None, None);
        assert!(matches!(result, Err(ConfigError::InvalidTimeout(raw)) if raw == "soon"));
    }

    #[test]
    fn overrides_skip_invalid_env_values() {
        let vars = env(&[
            ("SIGNUP_API_URL", "not a url"),
            ("SIGNUP_TIMEOUT_SECS", "soon"),
        ]);
        let cfg = resolve(vars, Some("http://localhost:9000"), Some(3)).unwrap();
        assert_eq!(cfg.base_url.as_str(), "http://localhost:9000/");
        assert_eq!(cfg.timeout_secs, 3);
    }

    #[test]
    fn zero_timeout_override_is_rejected() {
        assert!(matches!(
            resolve(env(&[]), None, Some(0)),
            Err(ConfigError::InvalidTimeout(_))
        ));
    }

    #[test]
    fn parse_base_url_reports_source() {
        let err = parse_base_url("SIGNUP_API_URL", "::").unwrap_err();
        assert!(err.to_string().contains("SIGNUP_API_URL"));
    }
}
