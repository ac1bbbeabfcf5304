/*
 * Responsibility
 * - Read settings from the environment (PORT, APP_ENV, CORS, gate policy, dev tokens)
 * - Validate them (startup fails on missing / malformed values)
 */
use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

use crate::services::authc::Policy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(value: Option<&str>) -> Self {
        match value
            .unwrap_or("development")
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing configuration: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
    pub cors_allowed_origins: Vec<String>,

    pub http_timeout: Duration,
    pub http_body_limit_bytes: usize,

    pub authc_policy: Policy,
    pub static_tokens: Vec<(String, String)>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key → value source (process env, a map in tests, ...).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port: u16 = match lookup("PORT") {
            Some(v) => v.trim().parse().map_err(|_| ConfigError::Invalid("PORT"))?,
            None => 3000,
        };
        let addr = SocketAddr::from(([0, 0, 0, 0], port));

        let app_env = AppEnv::parse(lookup("APP_ENV").as_deref());

        let cors_allowed_origins = split_list(lookup("CORS_ALLOWED_ORIGINS"));

        let http_timeout = match lookup("HTTP_TIMEOUT_SECONDS") {
            Some(v) => v
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|s| *s > 0)
                .map(Duration::from_secs)
                .ok_or(ConfigError::Invalid("HTTP_TIMEOUT_SECONDS"))?,
            None => Duration::from_secs(30),
        };

        let http_body_limit_bytes = match lookup("HTTP_BODY_LIMIT_BYTES") {
            Some(v) => v
                .trim()
                .parse::<usize>()
                .map_err(|_| ConfigError::Invalid("HTTP_BODY_LIMIT_BYTES"))?,
            None => 1024 * 1024,
        };

        let authc_policy = parse_policy(&lookup)?;
        let static_tokens = parse_static_tokens(lookup("AUTHC_STATIC_TOKENS"))?;

        Ok(Self {
            addr,
            app_env,
            cors_allowed_origins,
            http_timeout,
            http_body_limit_bytes,
            authc_policy,
            static_tokens,
        })
    }
}

fn split_list(raw: Option<String>) -> Vec<String> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_policy<F>(lookup: &F) -> Result<Policy, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let name = lookup("AUTHC_POLICY")
        .unwrap_or_else(|| "challenge".to_string())
        .trim()
        .to_ascii_lowercase();

    match name.as_str() {
        "challenge" => Ok(Policy::Challenge {
            realm: lookup("AUTHC_REALM")
                .filter(|r| !r.trim().is_empty())
                .unwrap_or_else(|| "api".to_string()),
        }),
        "redirect" => {
            let login_url = lookup("AUTHC_LOGIN_URL")
                .map(|u| u.trim().to_string())
                .filter(|u| !u.is_empty())
                .ok_or(ConfigError::Missing("AUTHC_LOGIN_URL"))?;
            Ok(Policy::Redirect { login_url })
        }
        "permit" => Ok(Policy::Permit),
        _ => Err(ConfigError::Invalid("AUTHC_POLICY")),
    }
}

// token=principal,token2=principal2
fn parse_static_tokens(raw: Option<String>) -> Result<Vec<(String, String)>, ConfigError> {
    split_list(raw)
        .into_iter()
        .map(|pair| {
            let (token, principal) = pair
                .split_once('=')
                .ok_or(ConfigError::Invalid("AUTHC_STATIC_TOKENS"))?;
            let (token, principal) = (token.trim(), principal.trim());
            if token.is_empty() || principal.is_empty() {
                return Err(ConfigError::Invalid("AUTHC_STATIC_TOKENS"));
            }
            Ok((token.to_string(), principal.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[]).unwrap();

        assert_eq!(config.addr.port(), 3000);
        assert_eq!(config.app_env, AppEnv::Development);
        assert!(config.cors_allowed_origins.is_empty());
        assert_eq!(config.http_timeout, Duration::from_secs(30));
        assert_eq!(config.http_body_limit_bytes, 1024 * 1024);
        assert_eq!(
            config.authc_policy,
            Policy::Challenge {
                realm: "api".into()
            }
        );
        assert!(config.static_tokens.is_empty());
    }

    #[test]
    fn reads_policy_and_tokens() {
        let config = config(&[
            ("PORT", "8080"),
            ("APP_ENV", "PROD"),
            ("CORS_ALLOWED_ORIGINS", "https://a.example, ,https://b.example"),
            ("AUTHC_POLICY", "Redirect"),
            ("AUTHC_LOGIN_URL", "/login"),
            ("AUTHC_STATIC_TOKENS", "dev-alice=alice, dev-bob = bob"),
        ])
        .unwrap();

        assert_eq!(config.addr.port(), 8080);
        assert!(config.app_env.is_production());
        assert_eq!(
            config.cors_allowed_origins,
            vec!["https://a.example", "https://b.example"]
        );
        assert_eq!(
            config.authc_policy,
            Policy::Redirect {
                login_url: "/login".into()
            }
        );
        assert_eq!(
            config.static_tokens,
            vec![
                ("dev-alice".to_string(), "alice".to_string()),
                ("dev-bob".to_string(), "bob".to_string()),
            ]
        );
    }

    #[test]
    fn redirect_requires_login_url() {
        let err = config(&[("AUTHC_POLICY", "redirect"), ("AUTHC_LOGIN_URL", "  ")]).unwrap_err();

        assert_eq!(err, ConfigError::Missing("AUTHC_LOGIN_URL"));
    }

    #[test]
    fn rejects_bad_values() {
        let cases = [
            (("AUTHC_POLICY", "deny-all"), "AUTHC_POLICY"),
            (("AUTHC_STATIC_TOKENS", "no-separator"), "AUTHC_STATIC_TOKENS"),
            (("AUTHC_STATIC_TOKENS", "=alice"), "AUTHC_STATIC_TOKENS"),
            (("PORT", "http"), "PORT"),
            (("HTTP_TIMEOUT_SECONDS", "0"), "HTTP_TIMEOUT_SECONDS"),
            (("HTTP_BODY_LIMIT_BYTES", "-1"), "HTTP_BODY_LIMIT_BYTES"),
        ];

        for ((key, value), expected) in cases {
            assert_eq!(
                config(&[(key, value)]).unwrap_err(),
                ConfigError::Invalid(expected),
                "{key}={value}"
            );
        }
    }
}
