#![allow(dead_code)]

//! Book catalog row model.
//!
//! Every column is optional: the catalog file is produced by an offline
//! pipeline and arrives with missing columns, empty cells, and stray
//! non-numeric values. Absent must stay distinguishable from zero, so
//! numerics are `Option` and junk degrades to `None` per cell rather
//! than failing the row.

use serde::{Deserialize, Deserializer};

/// Words kept when long free text leaves the core.
pub const CONTENT_PREVIEW_WORDS: usize = 100;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookRecord {
    #[serde(default, deserialize_with = "lenient_string")]
    pub product_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub authors: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub manufacturer: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub cover_link: Option<String>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub quantity: Option<u32>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub n_review: Option<u32>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub pages: Option<u32>,
    #[serde(default, deserialize_with = "lenient_float")]
    pub avg_rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient_float")]
    pub original_price: Option<f64>,
    #[serde(default, deserialize_with = "lenient_float")]
    pub current_price: Option<f64>,
}

impl BookRecord {
    /// First [`CONTENT_PREVIEW_WORDS`] words of the raw content column.
    pub fn content_preview(&self) -> Option<String> {
        self.content.as_deref().map(|content| {
            content
                .split_whitespace()
                .take(CONTENT_PREVIEW_WORDS)
                .collect::<Vec<_>>()
                .join(" ")
        })
    }

    /// Short text for display surfaces: the summary column, or a content
    /// preview when no summary was crawled.
    pub fn display_summary(&self) -> Option<String> {
        self.summary.clone().or_else(|| self.content_preview())
    }
}

/// Empty cells and pandas-style NaN markers become `None`.
fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty() && !s.eq_ignore_ascii_case("nan")))
}

/// Numeric cells may arrive as "1234", "1234.0", "", "nan", or garbage;
/// anything unparseable or negative is treated as missing.
fn lenient_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u32>, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v >= 0.0)
        .map(|v| v as u32))
}

fn lenient_float<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .and_then(|s| s.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite()))
}
