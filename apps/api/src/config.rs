use std::str::FromStr;

use anyhow::{bail, Context, Result};

/// Which ranking strategy serves `/recommend`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchStrategy {
    #[default]
    Keyword,
    Category,
}

impl FromStr for MatchStrategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "keyword" => Ok(MatchStrategy::Keyword),
            "category" => Ok(MatchStrategy::Category),
            other => bail!("MATCH_STRATEGY must be 'keyword' or 'category', got '{other}'"),
        }
    }
}

/// Application configuration loaded from environment variables. Every
/// variable has a sensible default; nothing here is a secret.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub catalog_path: String,
    pub match_strategy: MatchStrategy,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            catalog_path: std::env::var("CATALOG_PATH")
                .unwrap_or_else(|_| "dataset/books_full_data.csv".to_string()),
            match_strategy: std::env::var("MATCH_STRATEGY")
                .unwrap_or_else(|_| "keyword".to_string())
                .parse()?,
        })
    }
}
