//! Common utilities and helper functions
//!
//! This module provides shared numeric and text helpers used across the engine.

pub mod error;

use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Normalize keyword text for dictionary matching
///
/// Lower-cases the input and collapses runs of whitespace into single spaces.
pub fn normalize_keyword(text: &str) -> String {
    static WHITESPACE_RE: OnceLock<Regex> = OnceLock::new();

    let re = WHITESPACE_RE.get_or_init(|| Regex::new(r"\s+").expect("Invalid regex pattern"));

    re.replace_all(text.trim(), " ").to_lowercase()
}

/// Round a value to a fixed number of decimal places
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Clamp a score into the 0-100 range
///
/// NaN collapses to 0.
pub fn clamp_score(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

/// Advance a (year, month) pair by one calendar month
pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month >= 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

/// English month name for a 1-based month number
pub fn month_name(month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| chrono::Month::try_from(m).ok())
        .map(|m| m.name())
        .unwrap_or("Unknown")
}

/// Sanitize string for use as filename
///
/// Keeps alphanumerics, `-` and `_`, joins words with `_` and lower-cases.
pub fn sanitize_filename(s: &str, max_len: usize) -> String {
    let sanitized: String = s
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '_' || c.is_whitespace())
        .take(max_len)
        .collect();

    sanitized.split_whitespace().collect::<Vec<_>>().join("_").to_lowercase()
}

/// File stem for a keyword; `keyword` when nothing survives sanitizing
pub fn file_stem(keyword: &str) -> String {
    let stem = sanitize_filename(keyword, 60);
    if stem.is_empty() {
        String::from("keyword")
    } else {
        stem
    }
}

/// Hands out file stems that are unique within one run
///
/// The first claim of a stem returns it unchanged; later claims get a
/// numeric suffix (`best_crm`, `best_crm_2`, `best_crm_3`).
#[derive(Debug, Default)]
pub struct UniqueNames {
    used: HashSet<String>,
}

impl UniqueNames {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve `stem`, suffixing it on collision
    pub fn claim(&mut self, stem: &str) -> String {
        if self.used.insert(stem.to_string()) {
            return stem.to_string();
        }
        let mut n = 2;
        loop {
            let candidate = format!("{stem}_{n}");
            if self.used.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }
}
