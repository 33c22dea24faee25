//! Environment-mode configuration.
//!
//! The active deployment profile is resolved from the process environment and
//! controls exactly one behavior: whether fault envelopes mask the underlying
//! fault text behind an incident number.

use std::sync::OnceLock;

/// First key checked for the active deployment profile.
const ACTIVE_PROFILE_KEY: &str = "spring.profiles.active";

/// Fallback key when the active profile is unset or empty.
const ENV_KEY: &str = "rest-results.env";

static CURRENT: OnceLock<Environment> = OnceLock::new();

/// Deployment mode controlling fault-detail masking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Production,
    NonProduction,
}

impl Environment {
    /// Resolve the mode from the process environment.
    ///
    /// Reads `spring.profiles.active` first, falling back to
    /// `rest-results.env` when the profile is unset or empty. The mode is
    /// production iff the resolved value case-insensitively equals `prod` or
    /// `production`. Re-reads the environment on every call.
    pub fn detect() -> Self {
        let profile = std::env::var(ACTIVE_PROFILE_KEY)
            .ok()
            .filter(|value| !value.is_empty())
            .or_else(|| std::env::var(ENV_KEY).ok())
            .unwrap_or_default();

        if profile.eq_ignore_ascii_case("prod") || profile.eq_ignore_ascii_case("production") {
            Environment::Production
        } else {
            Environment::NonProduction
        }
    }

    /// Process-wide mode, resolved once on first use and cached.
    pub fn current() -> Self {
        *CURRENT.get_or_init(Self::detect)
    }

    pub fn is_production(self) -> bool {
        matches!(self, Environment::Production)
    }
}

#[cfg(test)]
mod tests {
    use super::Environment;

    // detect() reads process-global state, so these tests mutate and restore
    // the variables serially within a single test body.

    fn with_env(vars: &[(&str, Option<&str>)], check: impl FnOnce()) {
        let saved: Vec<(String, Option<String>)> = vars
            .iter()
            .map(|(key, _)| ((*key).to_string(), std::env::var(key).ok()))
            .collect();

        for (key, value) in vars {
            match value {
                Some(v) => std::env::set_var(key, v),
                None => std::env::remove_var(key),
            }
        }

        check();

        for (key, value) in saved {
            match value {
                Some(v) => std::env::set_var(&key, v),
                None => std::env::remove_var(&key),
            }
        }
    }

    #[test]
    fn detect_resolves_profile_keys() {
        with_env(
            &[
                ("spring.profiles.active", Some("production")),
                ("rest-results.env", None),
            ],
            || assert_eq!(Environment::detect(), Environment::Production),
        );

        with_env(
            &[
                ("spring.profiles.active", Some("PROD")),
                ("rest-results.env", None),
            ],
            || assert_eq!(Environment::detect(), Environment::Production),
        );

        // Empty active profile falls through to the second key.
        with_env(
            &[
                ("spring.profiles.active", Some("")),
                ("rest-results.env", Some("prod")),
            ],
            || assert_eq!(Environment::detect(), Environment::Production),
        );

        with_env(
            &[
                ("spring.profiles.active", Some("dev")),
                ("rest-results.env", Some("prod")),
            ],
            || assert_eq!(Environment::detect(), Environment::NonProduction),
        );

        with_env(
            &[
                ("spring.profiles.active", None),
                ("rest-results.env", None),
            ],
            || assert_eq!(Environment::detect(), Environment::NonProduction),
        );
    }

    #[test]
    fn is_production_matches_variant() {
        assert!(Environment::Production.is_production());
        assert!(!Environment::NonProduction.is_production());
    }
}
