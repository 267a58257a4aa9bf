//! Runtime settings read from the environment at startup.

use std::path::PathBuf;
use std::time::Duration;

use bevy::prelude::*;
use impact::Locale;

pub const ENV_EXPORT_DIR: &str = "P11_EXPORT_DIR";
pub const ENV_LOGO_TIMEOUT_SECS: &str = "P11_LOGO_TIMEOUT_SECS";
pub const ENV_LOCALE: &str = "P11_LOCALE";
pub const ENV_SKIP_LOGOS: &str = "P11_SKIP_LOGOS";

const DEFAULT_EXPORT_DIR: &str = "p11_exports";
const DEFAULT_LOGO_TIMEOUT: Duration = Duration::from_secs(10);

/// Where a partner logo is downloaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoSource {
    pub name: &'static str,
    pub url: &'static str,
}

pub const LOGO_SOURCES: [LogoSource; 2] = [
    LogoSource {
        name: "sustrend",
        url: "https://drive.google.com/uc?id=1vx_znPU2VfdkzeDtl91dlpw_p9mmu4dd",
    },
    LogoSource {
        name: "ttgreenfoods",
        url: "https://drive.google.com/uc?id=1uIQZQywjuQJz6Eokkj6dNSpBroJ8tQf8",
    },
];

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Directory that chart downloads are written into.
    pub export_dir: PathBuf,
    /// Per-request timeout for logo downloads.
    pub logo_timeout: Duration,
    /// Language the dashboard starts in.
    pub locale: Locale,
    pub fetch_logos: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            export_dir: PathBuf::from(DEFAULT_EXPORT_DIR),
            logo_timeout: DEFAULT_LOGO_TIMEOUT,
            locale: Locale::default(),
            fetch_logos: true,
        }
    }
}

impl DashboardConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup. Unparseable values are
    /// logged and replaced by their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = lookup(ENV_EXPORT_DIR).filter(|dir| !dir.trim().is_empty()) {
            config.export_dir = PathBuf::from(dir);
        }

        if let Some(raw) = lookup(ENV_LOGO_TIMEOUT_SECS) {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config.logo_timeout = Duration::from_secs(secs),
                _ => warn!("Ignoring {ENV_LOGO_TIMEOUT_SECS}={raw:?}: expected a positive integer"),
            }
        }

        if let Some(raw) = lookup(ENV_LOCALE) {
            match Locale::from_code(&raw) {
                Some(locale) => config.locale = locale,
                None => warn!("Ignoring {ENV_LOCALE}={raw:?}: unsupported locale"),
            }
        }

        if lookup(ENV_SKIP_LOGOS).is_some_and(|raw| is_truthy(&raw)) {
            config.fetch_logos = false;
        }

        config
    }
}

fn is_truthy(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> DashboardConfig {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        DashboardConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults_without_env() {
        let config = config_from(&[]);
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.export_dir, PathBuf::from("p11_exports"));
        assert_eq!(config.logo_timeout, Duration::from_secs(10));
        assert!(config.fetch_logos);
    }

    #[test]
    fn test_all_overrides() {
        let config = config_from(&[
            (ENV_EXPORT_DIR, "/tmp/charts"),
            (ENV_LOGO_TIMEOUT_SECS, "3"),
            (ENV_LOCALE, "es-CL"),
            (ENV_SKIP_LOGOS, "true"),
        ]);
        assert_eq!(config.export_dir, PathBuf::from("/tmp/charts"));
        assert_eq!(config.logo_timeout, Duration::from_secs(3));
        assert_eq!(config.locale, Locale::Spanish);
        assert!(!config.fetch_logos);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = config_from(&[
            (ENV_EXPORT_DIR, "   "),
            (ENV_LOGO_TIMEOUT_SECS, "soon"),
            (ENV_LOCALE, "klingon"),
            (ENV_SKIP_LOGOS, "0"),
        ]);
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = config_from(&[(ENV_LOGO_TIMEOUT_SECS, "0")]);
        assert_eq!(config.logo_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_logo_sources_are_https() {
        for source in LOGO_SOURCES {
            assert!(source.url.starts_with("https://"), "{}", source.name);
        }
    }
}
