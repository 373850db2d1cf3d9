//! Keyword-driven emotion classification.
//!
//! The classifier walks the category table in priority order and returns the
//! first category with a keyword contained in the diary text. When nothing
//! matches it falls back to a uniformly random category, so the user always
//! gets *some* emotion back rather than an "unknown" state.
//!
//! Matching is literal, case-sensitive substring containment with no word
//! boundaries. That is a deliberate carry-over from the product data: the
//! keyword 화 of the anger category matches 화요일 just as well as 화났다.

use crate::emotion::Emotion;
use crate::errors::AppResult;
use crate::lexicon::{Category, Lexicon};
use rand::Rng;
use serde::Serialize;
use tracing::debug;

/// The outcome of classifying one diary text.
///
/// Owned by the caller; the classifier keeps no record of it. A result with
/// no matched keyword means the random fallback picked the category.
#[derive(Debug, Clone, Serialize)]
pub struct Classification {
    /// The chosen emotion category.
    pub emotion: Emotion,
    /// Korean display label of the chosen category.
    pub label: String,
    /// Supportive message associated with the chosen category.
    pub description: String,
    /// The keyword that decided the classification, or `None` when the
    /// fallback path selected the category at random.
    pub matched_keyword: Option<String>,
}

impl Classification {
    pub(crate) fn from_category(category: &Category, matched_keyword: Option<String>) -> Self {
        Classification {
            emotion: category.emotion,
            label: category.label.clone(),
            description: category.description.clone(),
            matched_keyword,
        }
    }

    /// Whether the random fallback chose the category.
    pub fn is_fallback(&self) -> bool {
        self.matched_keyword.is_none()
    }
}

/// The contract every emotion analysis backend satisfies.
///
/// The keyword classifier implements it infallibly; the remote sentiment
/// client implements it over HTTP. Callers that only need "text in, emotion
/// plus display text out" depend on this trait and stay agnostic of the
/// backend.
pub trait Analyzer {
    /// Assigns an emotion category to the given diary text.
    fn analyze(&self, text: &str) -> AppResult<Classification>;
}

/// Deterministic keyword classifier over an immutable lexicon.
///
/// Stateless across calls and safe to share between threads; the only
/// non-determinism is the fallback's random draw, taken fresh on every call.
///
/// # Examples
///
/// ```
/// use maum::{Classifier, Emotion};
///
/// let classifier = Classifier::default();
///
/// let result = classifier.classify("너무 슬퍼");
/// assert_eq!(result.emotion, Emotion::Sad);
/// assert_eq!(result.matched_keyword.as_deref(), Some("슬"));
///
/// let result = classifier.classify("정말 행복하고 기쁨 가득한 하루");
/// assert_eq!(result.emotion, Emotion::Happy);
/// ```
pub struct Classifier {
    lexicon: Lexicon,
}

impl Classifier {
    /// Creates a classifier over the given lexicon.
    pub fn new(lexicon: Lexicon) -> Self {
        Classifier { lexicon }
    }

    /// The lexicon this classifier matches against.
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Classifies a diary text using the thread-local random generator for
    /// the fallback path.
    ///
    /// Total over all string inputs; the empty string never matches a
    /// keyword and always takes the fallback.
    pub fn classify(&self, text: &str) -> Classification {
        self.classify_with_rng(text, &mut rand::rng())
    }

    /// Classifies a diary text, drawing any fallback category from the
    /// supplied generator.
    ///
    /// Tests inject a seeded generator here to make the fallback
    /// deterministic.
    pub fn classify_with_rng<R: Rng>(&self, text: &str, rng: &mut R) -> Classification {
        for category in self.lexicon.categories() {
            if let Some(keyword) = category
                .keywords
                .iter()
                .find(|keyword| text.contains(keyword.as_str()))
            {
                debug!(
                    emotion = %category.emotion,
                    keyword = %keyword,
                    "Keyword match"
                );
                return Classification::from_category(category, Some(keyword.clone()));
            }
        }

        let categories = self.lexicon.categories();
        let category = &categories[rng.random_range(0..categories.len())];
        debug!(emotion = %category.emotion, "No keyword matched, fell back to random category");
        Classification::from_category(category, None)
    }
}

impl Default for Classifier {
    /// A classifier over the built-in category table.
    fn default() -> Self {
        Classifier::new(Lexicon::builtin())
    }
}

impl Analyzer for Classifier {
    fn analyze(&self, text: &str) -> AppResult<Classification> {
        Ok(self.classify(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_each_category_matches_its_own_keyword() {
        let classifier = Classifier::default();

        // texts built so that only the intended category's keyword appears
        let cases = [
            ("우울", Emotion::Sad),
            ("뿌듯", Emotion::Happy),
            ("억울", Emotion::Angry),
            ("오들", Emotion::Anxious),
            ("어이쿠", Emotion::Surprised),
        ];

        for (text, expected) in cases {
            let result = classifier.classify(text);
            assert_eq!(result.emotion, expected, "text: {}", text);
            assert_eq!(result.matched_keyword.as_deref(), Some(text));
            assert!(!result.is_fallback());
        }
    }

    #[test]
    fn test_priority_order_resolves_overlap() {
        let classifier = Classifier::default();

        // 짜증 (anger) appears later in the text than 좋 (happiness), but
        // position in the text is irrelevant: happy has higher priority.
        let result = classifier.classify("나는 오늘 좋았고 기쁨도 느꼈지만 짜증도 났다");
        assert_eq!(result.emotion, Emotion::Happy);

        // sad beats everything
        let result = classifier.classify("기쁨과 분노와 슬픔이 뒤섞인 날");
        assert_eq!(result.emotion, Emotion::Sad);
    }

    #[test]
    fn test_substring_matching_has_no_word_boundaries() {
        let classifier = Classifier::default();

        // 화요일 contains the anger keyword 화 even though the text is
        // about a Tuesday, not about being angry
        let result = classifier.classify("화요일에 도서관에 갔다");
        assert_eq!(result.emotion, Emotion::Angry);
        assert_eq!(result.matched_keyword.as_deref(), Some("화"));
    }

    #[test]
    fn test_matching_is_case_sensitive_and_literal() {
        let classifier = Classifier::default();

        // no normalization: a keyword absent as an exact substring never matches
        let result = classifier.classify_with_rng("ᄉ ᅳ ᆯ", &mut StdRng::seed_from_u64(7));
        assert!(result.is_fallback());
    }

    #[test]
    fn test_fallback_reports_no_keyword() {
        let classifier = Classifier::default();
        let mut rng = StdRng::seed_from_u64(42);

        let result = classifier.classify_with_rng("오늘은 평범한 하루였다", &mut rng);
        assert!(result.is_fallback());
        assert_eq!(result.matched_keyword, None);
        assert!(Emotion::ALL.contains(&result.emotion));
    }

    #[test]
    fn test_empty_string_takes_fallback() {
        let classifier = Classifier::default();
        let mut rng = StdRng::seed_from_u64(1);

        let result = classifier.classify_with_rng("", &mut rng);
        assert!(result.is_fallback());
        assert!(Emotion::ALL.contains(&result.emotion));
    }

    #[test]
    fn test_fallback_rerolls_each_call() {
        let classifier = Classifier::default();
        let mut rng = StdRng::seed_from_u64(3);

        // same unmatched input, independent draws: over 100 calls the
        // fallback must not be stuck on one category
        let mut seen = std::collections::HashSet::new();
        for _ in 0..100 {
            seen.insert(classifier.classify_with_rng("xyz", &mut rng).emotion);
        }
        assert!(seen.len() > 1);
    }

    #[test]
    fn test_result_serializes_with_emotion_key() {
        let classifier = Classifier::default();
        let result = classifier.classify("너무 슬퍼");

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["emotion"], "sad");
        assert_eq!(json["label"], "슬픔");
        assert_eq!(json["matched_keyword"], "슬");
    }

    #[test]
    fn test_analyzer_trait_wraps_classify() {
        let classifier = Classifier::default();
        let result = classifier.analyze("깜짝 놀랐다").unwrap();
        assert_eq!(result.emotion, Emotion::Surprised);
    }
}
