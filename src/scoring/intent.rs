//! Search intent and buying-stage classification
//!
//! Keywords are lower-cased and matched against the dictionaries in
//! [`IntentTables`]. A term matches when it occurs as a substring bounded by
//! non-alphanumeric characters, so "top" matches "top laptops" but not
//! "laptop". Multi-word terms count once per word, making specific phrases
//! outweigh single generic words.
//!
//! The recommendation text is rendered in the classifier's locale, English
//! unless set through [`IntentClassifier::with_locale`]. Classification
//! never reads the process-wide locale.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::i18n::{normalize_locale, t, DEFAULT_LOCALE};
use crate::reference::IntentTables;
use crate::utils::{clamp_score, normalize_keyword};

/// Primary search intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchIntent {
    Informational,
    Navigational,
    Commercial,
    Transactional,
}

impl SearchIntent {
    /// Tie-break order, strongest purchase signal first
    pub const PRECEDENCE: [Self; 4] = [
        Self::Transactional,
        Self::Commercial,
        Self::Navigational,
        Self::Informational,
    ];

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Informational => "informational",
            Self::Navigational => "navigational",
            Self::Commercial => "commercial",
            Self::Transactional => "transactional",
        }
    }

    /// Buying stage implied by the intent when no stage term matched
    pub fn default_stage(&self) -> BuyingStage {
        match self {
            Self::Informational => BuyingStage::Awareness,
            Self::Commercial => BuyingStage::Consideration,
            Self::Navigational | Self::Transactional => BuyingStage::Decision,
        }
    }

    fn dictionary<'t>(&self, tables: &'t IntentTables) -> &'t [String] {
        match self {
            Self::Informational => &tables.informational,
            Self::Navigational => &tables.navigational,
            Self::Commercial => &tables.commercial,
            Self::Transactional => &tables.transactional,
        }
    }

    fn commercial_base(&self, tables: &IntentTables) -> f64 {
        let base = &tables.commercial_base;
        match self {
            Self::Informational => base.informational,
            Self::Navigational => base.navigational,
            Self::Commercial => base.commercial,
            Self::Transactional => base.transactional,
        }
    }
}

impl fmt::Display for SearchIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position in the purchase journey
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuyingStage {
    Awareness,
    Consideration,
    Decision,
}

impl BuyingStage {
    /// Tie-break order, latest stage first
    pub const PRECEDENCE: [Self; 3] = [Self::Decision, Self::Consideration, Self::Awareness];

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Awareness => "awareness",
            Self::Consideration => "consideration",
            Self::Decision => "decision",
        }
    }

    fn dictionary<'t>(&self, tables: &'t IntentTables) -> &'t [String] {
        match self {
            Self::Awareness => &tables.awareness,
            Self::Consideration => &tables.consideration,
            Self::Decision => &tables.decision,
        }
    }
}

impl fmt::Display for BuyingStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Intent classification result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentAnalysis {
    pub primary: SearchIntent,
    /// 0-100
    pub confidence: u8,
    pub buying_stage: BuyingStage,
    /// 0-100
    pub commercial_score: u8,
    pub recommendation: String,
    /// Dictionary terms that matched the primary intent
    pub matched_terms: Vec<String>,
}

/// Matches of one dictionary against a keyword
#[derive(Debug, Default)]
struct Matches {
    terms: Vec<String>,
    strength: f64,
}

impl Matches {
    fn collect(keyword: &str, dictionary: &[String]) -> Self {
        let terms: Vec<String> = dictionary
            .iter()
            .filter(|term| contains_term(keyword, term))
            .cloned()
            .collect();
        let strength = terms
            .iter()
            .map(|t| t.split_whitespace().count() as f64)
            .sum();
        Self { terms, strength }
    }
}

/// Dictionary-driven intent classifier
#[derive(Debug, Clone, Copy)]
pub struct IntentClassifier<'a> {
    tables: &'a IntentTables,
    locale: &'static str,
}

impl<'a> IntentClassifier<'a> {
    /// Create a classifier over the given dictionaries
    #[must_use]
    pub fn new(tables: &'a IntentTables) -> Self {
        Self {
            tables,
            locale: DEFAULT_LOCALE,
        }
    }

    /// Render recommendations in `locale` (en, ko or a regional variant)
    #[must_use]
    pub fn with_locale(mut self, locale: &str) -> Self {
        self.locale = normalize_locale(locale);
        self
    }

    /// Classify a keyword
    ///
    /// # Arguments
    /// * `keyword` - Raw query text
    /// * `cpc` - Optional cost-per-click; higher CPC raises the commercial score
    ///
    /// Keywords matching no intent term default to `informational` with the
    /// table's default confidence (25).
    #[must_use]
    pub fn classify(&self, keyword: &str, cpc: Option<f64>) -> IntentAnalysis {
        let normalized = normalize_keyword(keyword);

        let intent_matches: Vec<(SearchIntent, Matches)> = SearchIntent::PRECEDENCE
            .iter()
            .map(|&intent| (intent, Matches::collect(&normalized, intent.dictionary(self.tables))))
            .collect();

        let total: f64 = intent_matches.iter().map(|(_, m)| m.strength).sum();

        let (primary, primary_matches) = pick_strongest(&intent_matches)
            .unwrap_or((SearchIntent::Informational, &EMPTY_MATCHES));

        let confidence = if total > 0.0 {
            let share = primary_matches.strength / total;
            let specificity = primary_matches.terms.len().min(2) as f64 * 5.0;
            clamp_score((40.0 + 45.0 * share + specificity).round()) as u8
        } else {
            self.tables.default_confidence.min(100)
        };

        let stage_matches: Vec<(BuyingStage, Matches)> = BuyingStage::PRECEDENCE
            .iter()
            .map(|&stage| (stage, Matches::collect(&normalized, stage.dictionary(self.tables))))
            .collect();
        let buying_stage = pick_strongest(&stage_matches)
            .map(|(stage, _)| stage)
            .unwrap_or_else(|| primary.default_stage());

        let purchase_terms: usize = intent_matches
            .iter()
            .filter(|(intent, _)| {
                matches!(intent, SearchIntent::Transactional | SearchIntent::Commercial)
            })
            .map(|(_, m)| m.terms.len())
            .sum();
        let commercial_score = self.commercial_score(primary, purchase_terms, cpc);

        tracing::debug!(
            keyword = %normalized,
            intent = primary.as_str(),
            confidence,
            stage = buying_stage.as_str(),
            commercial_score,
            "Intent classified"
        );

        IntentAnalysis {
            primary,
            confidence,
            buying_stage,
            commercial_score,
            recommendation: recommendation(primary, &normalized, self.locale),
            matched_terms: primary_matches.terms.clone(),
        }
    }

    fn commercial_score(&self, primary: SearchIntent, purchase_terms: usize, cpc: Option<f64>) -> u8 {
        let t = self.tables;
        let extra = purchase_terms.saturating_sub(1).min(t.max_extra_terms) as f64;
        let cpc_bonus = cpc
            .filter(|c| c.is_finite() && *c > 0.0)
            .map(|c| (c * t.cpc_bonus_per_unit).min(t.max_cpc_bonus))
            .unwrap_or(0.0);

        clamp_score((primary.commercial_base(t) + extra * t.extra_term_bonus + cpc_bonus).round()) as u8
    }
}

static EMPTY_MATCHES: Matches = Matches {
    terms: Vec::new(),
    strength: 0.0,
};

/// Strongest non-empty entry; earlier entries win ties
fn pick_strongest<K: Copy>(entries: &[(K, Matches)]) -> Option<(K, &Matches)> {
    let mut best: Option<(K, &Matches)> = None;
    for (key, matches) in entries {
        if matches.strength <= 0.0 {
            continue;
        }
        if best.map_or(true, |(_, b)| matches.strength > b.strength) {
            best = Some((*key, matches));
        }
    }
    best
}

/// Whether `term` occurs in `haystack` bounded by non-alphanumeric characters
fn contains_term(haystack: &str, term: &str) -> bool {
    if term.is_empty() {
        return false;
    }
    haystack.match_indices(term).any(|(start, matched)| {
        let end = start + matched.len();
        let before = haystack[..start].chars().next_back();
        let after = haystack[end..].chars().next();
        before.map_or(true, |c| !c.is_alphanumeric()) && after.map_or(true, |c| !c.is_alphanumeric())
    })
}

fn recommendation(intent: SearchIntent, keyword: &str, locale: &str) -> String {
    match intent {
        SearchIntent::Informational => {
            t!("intent.recommendation.informational", locale = locale, keyword = keyword)
        }
        SearchIntent::Navigational => {
            t!("intent.recommendation.navigational", locale = locale, keyword = keyword)
        }
        SearchIntent::Commercial => {
            t!("intent.recommendation.commercial", locale = locale, keyword = keyword)
        }
        SearchIntent::Transactional => {
            t!("intent.recommendation.transactional", locale = locale, keyword = keyword)
        }
    }
    .to_string()
}
