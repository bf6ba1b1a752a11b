//! Runtime configuration read from the environment

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::{Context, Result};
use shared_types::DocumentCategory;

const DEFAULT_PORT: u16 = 3001;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind_addr: IpAddr,
    pub port: u16,
    /// Categories a project must cover before it can be submitted
    pub categories: Vec<DocumentCategory>,
}

impl Config {
    /// Load from process environment (after `.env`, if any)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(p) => p.parse().with_context(|| format!("Invalid PORT: {}", p))?,
            None => DEFAULT_PORT,
        };

        let bind_addr = match lookup("BIND_ADDR") {
            Some(a) => a
                .parse()
                .with_context(|| format!("Invalid BIND_ADDR: {}", a))?,
            None => IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        };

        let categories = match lookup("PERMIT_CATEGORIES") {
            Some(list) => parse_categories(&list)?,
            None => DocumentCategory::ALL.to_vec(),
        };

        Ok(Self {
            bind_addr,
            port,
            categories,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            categories: DocumentCategory::ALL.to_vec(),
        }
    }
}

/// Comma-separated category keys, e.g. `SITE_PLAN,COVER_LETTER`
fn parse_categories(list: &str) -> Result<Vec<DocumentCategory>> {
    list.split(',')
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(|key| {
            key.parse::<DocumentCategory>()
                .context("Invalid PERMIT_CATEGORIES")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.socket_addr().port(), 3001);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup(&[
            ("PORT", "8080"),
            ("BIND_ADDR", "127.0.0.1"),
            ("PERMIT_CATEGORIES", "SITE_PLAN, COVER_LETTER,"),
        ]))
        .unwrap();
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(
            config.categories,
            vec![DocumentCategory::SitePlan, DocumentCategory::CoverLetter]
        );
    }

    #[test]
    fn test_invalid_port() {
        assert!(Config::from_lookup(lookup(&[("PORT", "http")])).is_err());
    }

    #[test]
    fn test_invalid_category_is_startup_error() {
        let err = Config::from_lookup(lookup(&[("PERMIT_CATEGORIES", "SITE_PLAN,ROOF")]))
            .unwrap_err();
        assert!(format!("{:#}", err).contains("ROOF"));
    }
}
