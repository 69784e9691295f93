//! Intent and buying-stage keyword dictionaries
//!
//! The classifier in [`crate::scoring::intent`] only knows how to match
//! terms; which terms signal which intent is pure data kept here.

use serde::{Deserialize, Serialize};

fn terms(list: &[&str]) -> Vec<String> {
    list.iter().map(|t| (*t).to_string()).collect()
}

/// Dictionaries and score parameters for search-intent classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntentTables {
    pub transactional: Vec<String>,
    pub commercial: Vec<String>,
    pub informational: Vec<String>,
    pub navigational: Vec<String>,

    pub awareness: Vec<String>,
    pub consideration: Vec<String>,
    pub decision: Vec<String>,

    /// Confidence reported for keywords matching no dictionary
    pub default_confidence: u8,

    /// Commercial score base per intent
    pub commercial_base: CommercialBase,

    /// Commercial score added per extra transactional/commercial term
    pub extra_term_bonus: f64,
    /// Cap on extra terms counted
    pub max_extra_terms: usize,

    /// Commercial score added per currency unit of CPC
    pub cpc_bonus_per_unit: f64,
    /// Cap on the CPC contribution
    pub max_cpc_bonus: f64,
}

/// Commercial score starting point per intent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommercialBase {
    pub transactional: f64,
    pub commercial: f64,
    pub navigational: f64,
    pub informational: f64,
}

impl Default for CommercialBase {
    fn default() -> Self {
        Self {
            transactional: 80.0,
            commercial: 60.0,
            navigational: 30.0,
            informational: 15.0,
        }
    }
}

impl Default for IntentTables {
    fn default() -> Self {
        Self {
            transactional: terms(&[
                "buy", "purchase", "order", "coupon", "discount", "deal", "deals", "price",
                "pricing", "cheap", "for sale", "shipping", "subscribe", "download",
                "free trial", "book now", "promo code",
            ]),
            commercial: terms(&[
                "best", "top", "review", "reviews", "vs", "versus", "compare", "comparison",
                "alternative", "alternatives", "rated", "recommended",
            ]),
            informational: terms(&[
                "how to", "what is", "what are", "why", "guide", "tutorial", "tips", "learn",
                "examples", "definition", "meaning", "benefits of", "ideas",
            ]),
            navigational: terms(&[
                "login", "log in", "sign in", "official site", "website", "near me",
                "customer service", "contact", "account", "homepage",
            ]),

            awareness: terms(&[
                "what is", "what are", "how to", "why", "guide", "tutorial", "tips", "ideas",
                "benefits", "definition", "meaning",
            ]),
            consideration: terms(&[
                "best", "top", "review", "reviews", "vs", "versus", "compare", "comparison",
                "alternative", "alternatives", "features",
            ]),
            decision: terms(&[
                "buy", "price", "pricing", "coupon", "discount", "deal", "deals", "order",
                "near me", "free trial", "cheap", "promo code", "book now",
            ]),

            default_confidence: 25,
            commercial_base: CommercialBase::default(),
            extra_term_bonus: 5.0,
            max_extra_terms: 3,
            cpc_bonus_per_unit: 4.0,
            max_cpc_bonus: 20.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dictionaries_are_lowercase() {
        let tables = IntentTables::default();
        let all = [
            &tables.transactional,
            &tables.commercial,
            &tables.informational,
            &tables.navigational,
            &tables.awareness,
            &tables.consideration,
            &tables.decision,
        ];
        for list in all {
            assert!(!list.is_empty());
            assert!(list.iter().all(|t| t == &t.to_lowercase()));
        }
    }

    #[test]
    fn test_intent_dictionaries_disjoint() {
        let tables = IntentTables::default();
        for term in &tables.commercial {
            assert!(!tables.transactional.contains(term), "{term} in two intents");
            assert!(!tables.informational.contains(term), "{term} in two intents");
        }
    }
}
