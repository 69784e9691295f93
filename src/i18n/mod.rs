//! Internationalization (i18n) support for rankwise
//!
//! This module provides multi-language support for recommendations, error
//! descriptions and report headings. Supported languages: English (en), Korean (ko).
//!
//! # Environment Variables
//!
//! - `RANKWISE_LANG`: Set the preferred language (en, ko). Defaults to English.
//!   Read by [`crate::config::Config::from_env`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use rankwise::i18n::{t, set_locale};
//!
//! set_locale("ko");
//! let msg = t!("intent.recommendation.commercial", keyword = "crm");
//! ```

// Note: rust_i18n::i18n! macro is declared in lib.rs (crate root)

/// Supported locale codes
pub const SUPPORTED_LOCALES: [&str; 2] = ["en", "ko"];

/// Locale used when none is configured
pub const DEFAULT_LOCALE: &str = "en";

/// Set the current locale for translations
///
/// # Arguments
///
/// * `locale` - Language code (en, ko, or a regional variant such as ko-KR)
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(normalize_locale(locale));
}

/// Whether `locale` maps to a supported language other than by fallback
#[must_use]
pub fn is_supported(locale: &str) -> bool {
    let lower = locale.trim().to_lowercase();
    lower == "korean" || lower == "english" || supported_prefix(&lower).is_some()
}

/// Normalize locale code to supported format
///
/// - ko-KR, ko_KR, korean -> ko
/// - anything else -> en
#[must_use]
pub fn normalize_locale(locale: &str) -> &'static str {
    let lower = locale.trim().to_lowercase();

    if lower == "korean" {
        return "ko";
    }
    supported_prefix(&lower).unwrap_or(DEFAULT_LOCALE)
}

fn supported_prefix(lower: &str) -> Option<&'static str> {
    SUPPORTED_LOCALES.iter().copied().find(|code| {
        lower
            .strip_prefix(code)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with(['-', '_']))
    })
}

/// Translate a key with optional parameters
///
/// This is a re-export of rust_i18n::t! for convenience.
///
/// ```rust,ignore
/// use rankwise::i18n::t;
///
/// let msg = t!("errors.category.validation");
/// let msg_with_args = t!("intent.recommendation.informational", keyword = "tent");
/// ```
#[doc(inline)]
pub use rust_i18n::t;
