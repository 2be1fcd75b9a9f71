//! Intent resolution: utterance → best-matching action + confidence.
//!
//! The matching strategy is chosen once at construction: embedding mode
//! when an index could be built, keyword mode otherwise. A per-call
//! embedding failure still degrades to keyword scoring instead of
//! propagating. Resolution never fails: empty input, an empty catalog,
//! or zero matches all yield the fallback action at confidence 0.0.
//! The fallback is configured, checked against the catalog at
//! construction, so resolved names stay inside the catalog whenever the
//! catalog is non-empty.

use sema_core::config::ResolverConfig;
use sema_core::models::{Intent, MatchMode, ResolverStatus, Suggestion};
use sema_core::traits::{EmbeddingProvider, EntityRecognizer};
use tracing::{debug, warn};

use crate::catalog::ActionCatalog;
use crate::extract::EntityExtractor;
use crate::index::{cosine_similarity, EmbeddingIndex};

/// Matching strategy, fixed at construction.
enum MatchStrategy {
    /// Cosine similarity against the embedding index.
    Embedding {
        provider: Box<dyn EmbeddingProvider>,
        index: EmbeddingIndex,
    },
    /// Matched-keyword ratio per action.
    Keyword,
}

/// Resolves utterances against a closed action catalog.
pub struct IntentResolver {
    catalog: ActionCatalog,
    strategy: MatchStrategy,
    extractor: EntityExtractor,
    config: ResolverConfig,
    fallback: String,
}

impl IntentResolver {
    /// Keyword-only resolver.
    pub fn new(catalog: ActionCatalog, config: ResolverConfig) -> Self {
        let fallback = Self::fallback_for(&catalog, &config);
        Self {
            catalog,
            strategy: MatchStrategy::Keyword,
            extractor: EntityExtractor::new(),
            config,
            fallback,
        }
    }

    /// Resolver with an embedding provider. Falls back to keyword mode
    /// when the index cannot be built (degraded, not an error).
    pub fn with_embeddings(
        catalog: ActionCatalog,
        provider: Box<dyn EmbeddingProvider>,
        config: ResolverConfig,
    ) -> Self {
        let index = EmbeddingIndex::build(&catalog, provider.as_ref());
        let strategy = if index.is_empty() {
            warn!(provider = provider.name(), "embedding index empty, keyword mode active");
            MatchStrategy::Keyword
        } else {
            MatchStrategy::Embedding { provider, index }
        };
        let fallback = Self::fallback_for(&catalog, &config);
        Self {
            catalog,
            strategy,
            extractor: EntityExtractor::new(),
            config,
            fallback,
        }
    }

    /// The configured fallback action when the catalog knows it, else
    /// the first catalog action. Only an empty catalog can make
    /// resolution name an action outside the catalog.
    fn fallback_for(catalog: &ActionCatalog, config: &ResolverConfig) -> String {
        if catalog.is_empty() || catalog.contains(&config.fallback_action) {
            config.fallback_action.clone()
        } else {
            let first = catalog.actions()[0].name.clone();
            warn!(
                configured = %config.fallback_action,
                substitute = %first,
                "fallback action not in catalog, using first catalog action"
            );
            first
        }
    }

    /// Attach a named-entity recognizer to the extraction step.
    pub fn with_recognizer(mut self, recognizer: Box<dyn EntityRecognizer>) -> Self {
        self.extractor = EntityExtractor::with_recognizer(recognizer);
        self
    }

    /// Resolve an utterance to an intent. Never fails.
    pub fn resolve(&self, utterance: &str) -> Intent {
        let normalized = normalize(utterance);
        let entities = self.extractor.extract(&normalized);
        let (action_name, confidence) = self.best_match(&normalized);

        debug!(action = %action_name, confidence, "resolved intent");

        Intent {
            action_name,
            confidence,
            entities,
            raw_text: utterance.to_string(),
        }
    }

    /// Ranked alternatives for ambiguous input: every action scored
    /// under the active strategy, sorted by descending confidence
    /// (stable, so ties keep catalog order), truncated to `limit`.
    pub fn suggestions(&self, utterance: &str, limit: usize) -> Vec<Suggestion> {
        let normalized = normalize(utterance);
        let scores = self.score_all(&normalized);

        let mut ranked: Vec<Suggestion> = self
            .catalog
            .actions()
            .iter()
            .zip(scores)
            .map(|(action, confidence)| Suggestion {
                action_name: action.name.clone(),
                confidence,
                description: action.description.clone(),
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked.truncate(limit);
        ranked
    }

    /// Introspectable status, including degraded modes.
    pub fn status(&self) -> ResolverStatus {
        let (mode, dims) = match &self.strategy {
            MatchStrategy::Embedding { index, .. } => {
                (MatchMode::Embedding, Some(index.dimensions()))
            }
            MatchStrategy::Keyword => (MatchMode::Keyword, None),
        };
        ResolverStatus {
            mode,
            embedding_dimensions: dims,
            catalog_size: self.catalog.len(),
            recognizer_available: self.extractor.recognizer_available(),
        }
    }

    /// The caller-facing threshold below which suggestions should be
    /// shown instead of auto-dispatching.
    pub fn confidence_threshold(&self) -> f32 {
        self.config.confidence_threshold
    }

    /// The configured default suggestion limit.
    pub fn max_suggestions(&self) -> usize {
        self.config.max_suggestions
    }

    pub fn catalog(&self) -> &ActionCatalog {
        &self.catalog
    }

    /// Best-scoring action under the active strategy. Starts from the
    /// fallback action at 0.0, so nothing beating that score leaves the
    /// fallback in place; strict `>` keeps the first-seen action on ties.
    fn best_match(&self, normalized: &str) -> (String, f32) {
        let scores = self.score_all(normalized);

        let mut best_name = self.fallback.clone();
        let mut best_score = 0.0f32;
        for (action, score) in self.catalog.actions().iter().zip(scores) {
            if score > best_score {
                best_name = action.name.clone();
                best_score = score;
            }
        }
        (best_name, best_score)
    }

    /// Score every catalog action, in catalog order.
    fn score_all(&self, normalized: &str) -> Vec<f32> {
        match &self.strategy {
            MatchStrategy::Embedding { provider, index } => {
                match provider.embed(normalized) {
                    Ok(query) => index
                        .iter()
                        .map(|(_, vector)| cosine_similarity(&query, vector))
                        .collect(),
                    Err(error) => {
                        // Per-call degradation: embedding failed for
                        // this utterance only.
                        warn!(error = %error, "query embedding failed, scoring by keywords");
                        self.keyword_scores(normalized)
                    }
                }
            }
            MatchStrategy::Keyword => self.keyword_scores(normalized),
        }
    }

    /// Matched-keyword-substring count over keyword count; actions
    /// without keywords score 0.
    fn keyword_scores(&self, normalized: &str) -> Vec<f32> {
        self.catalog
            .actions()
            .iter()
            .map(|action| {
                if action.keywords.is_empty() {
                    return 0.0;
                }
                let matched = action
                    .keywords
                    .iter()
                    .filter(|keyword| normalized.contains(keyword.as_str()))
                    .count();
                matched as f32 / action.keywords.len() as f32
            })
            .collect()
    }
}

/// Collapse whitespace runs to single spaces, trim, and lowercase.
/// The original casing stays in `Intent::raw_text`.
fn normalize(utterance: &str) -> String {
    utterance
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::HashedBowProvider;
    use proptest::prelude::*;
    use sema_core::constants::DEFAULT_ACTION;
    use sema_core::errors::{EmbeddingError, SemaResult};
    use sema_core::models::Action;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn weather_time_catalog() -> ActionCatalog {
        ActionCatalog::new(vec![
            Action::new(
                "weather",
                "Get weather information",
                &[],
                &["weather", "temperature", "rain", "forecast"],
                &[],
            ),
            Action::new("time", "Show the time", &[], &["time", "date", "clock"], &[]),
        ])
    }

    #[test]
    fn keyword_scenario_from_two_of_four_keywords() {
        let resolver = IntentResolver::new(weather_time_catalog(), ResolverConfig::default());
        let intent = resolver.resolve("what's the weather forecast for today");
        assert_eq!(intent.action_name, "weather");
        assert!((intent.confidence - 0.5).abs() < 1e-6);
    }

    #[test]
    fn all_keywords_matched_scores_one() {
        let resolver = IntentResolver::new(weather_time_catalog(), ResolverConfig::default());
        let intent = resolver.resolve("weather temperature rain forecast");
        assert_eq!(intent.action_name, "weather");
        assert!((intent.confidence - 1.0).abs() < 1e-6);
    }

    #[test]
    fn empty_and_whitespace_input_yield_the_fallback() {
        let resolver = IntentResolver::new(ActionCatalog::builtin(), ResolverConfig::default());
        for input in ["", "   "] {
            let intent = resolver.resolve(input);
            assert_eq!(intent.action_name, DEFAULT_ACTION);
            assert_eq!(intent.confidence, 0.0);
            assert!(intent.entities.is_empty());
        }
    }

    #[test]
    fn empty_catalog_still_resolves_to_the_configured_fallback() {
        let resolver = IntentResolver::new(ActionCatalog::new(Vec::new()), ResolverConfig::default());
        let intent = resolver.resolve("do something useful");
        assert_eq!(intent.action_name, DEFAULT_ACTION);
        assert_eq!(intent.confidence, 0.0);
    }

    #[test]
    fn fallback_outside_catalog_substitutes_first_action() {
        // The default fallback ("hi") is not in this catalog; resolved
        // names must stay inside it anyway.
        let resolver = IntentResolver::new(weather_time_catalog(), ResolverConfig::default());
        for input in ["", "zzqx gibberish", "what's the weather"] {
            let intent = resolver.resolve(input);
            assert!(
                resolver.catalog().contains(&intent.action_name),
                "{:?} resolved outside the catalog",
                input
            );
        }
        let intent = resolver.resolve("zzqx gibberish");
        assert_eq!(intent.action_name, "weather");
        assert_eq!(intent.confidence, 0.0);
    }

    #[test]
    fn configured_fallback_is_honored_when_present() {
        let config = ResolverConfig {
            fallback_action: "time".to_string(),
            ..Default::default()
        };
        let resolver = IntentResolver::new(weather_time_catalog(), config);
        let intent = resolver.resolve("zzqx gibberish");
        assert_eq!(intent.action_name, "time");
        assert_eq!(intent.confidence, 0.0);
    }

    #[test]
    fn ties_keep_catalog_order() {
        let catalog = ActionCatalog::new(vec![
            Action::new("first", "first action", &[], &["shared"], &[]),
            Action::new("second", "second action", &[], &["shared"], &[]),
        ]);
        let resolver = IntentResolver::new(catalog, ResolverConfig::default());
        let intent = resolver.resolve("a shared keyword");
        assert_eq!(intent.action_name, "first");
    }

    #[test]
    fn raw_text_preserves_original_casing() {
        let resolver = IntentResolver::new(weather_time_catalog(), ResolverConfig::default());
        let intent = resolver.resolve("  Weather   in New York ");
        assert_eq!(intent.raw_text, "  Weather   in New York ");
    }

    #[test]
    fn confidence_is_always_finite() {
        let resolver = IntentResolver::with_embeddings(
            ActionCatalog::builtin(),
            Box::new(HashedBowProvider::default()),
            ResolverConfig::default(),
        );
        for input in ["", "weather", "xyzzy plugh", "who is Ada Lovelace?"] {
            assert!(resolver.resolve(input).confidence.is_finite());
        }
    }

    #[test]
    fn embedding_mode_is_deterministic() {
        let make = || {
            IntentResolver::with_embeddings(
                ActionCatalog::builtin(),
                Box::new(HashedBowProvider::default()),
                ResolverConfig::default(),
            )
        };
        let a = make().resolve("weather forecast for london");
        let b = make().resolve("weather forecast for london");
        assert_eq!(a.action_name, b.action_name);
        assert_eq!(a.confidence, b.confidence);
    }

    #[test]
    fn embedding_mode_reports_status() {
        let resolver = IntentResolver::with_embeddings(
            ActionCatalog::builtin(),
            Box::new(HashedBowProvider::new(128)),
            ResolverConfig::default(),
        );
        let status = resolver.status();
        assert_eq!(status.mode, MatchMode::Embedding);
        assert_eq!(status.embedding_dimensions, Some(128));
        assert_eq!(status.catalog_size, 12);
        assert!(!status.recognizer_available);
    }

    #[test]
    fn suggestions_sorted_and_bounded() {
        let resolver = IntentResolver::new(ActionCatalog::builtin(), ResolverConfig::default());
        let suggestions = resolver.suggestions("search the web for rust videos", 3);
        assert!(suggestions.len() <= 3);
        for pair in suggestions.windows(2) {
            assert!(pair[0].confidence >= pair[1].confidence);
        }
    }

    #[test]
    fn suggestion_ties_keep_catalog_order() {
        let catalog = ActionCatalog::new(vec![
            Action::new("alpha", "alpha action", &[], &["token"], &[]),
            Action::new("beta", "beta action", &[], &["token"], &[]),
        ]);
        let resolver = IntentResolver::new(catalog, ResolverConfig::default());
        let suggestions = resolver.suggestions("token", 2);
        assert_eq!(suggestions[0].action_name, "alpha");
        assert_eq!(suggestions[1].action_name, "beta");
    }

    /// Succeeds while the index is built, then fails on query embeds.
    struct FlakyProvider {
        remaining_ok: AtomicUsize,
    }
    impl EmbeddingProvider for FlakyProvider {
        fn embed(&self, text: &str) -> SemaResult<Vec<f32>> {
            if self.remaining_ok.load(Ordering::SeqCst) == 0 {
                return Err(EmbeddingError::InferenceFailed {
                    reason: "mock outage".to_string(),
                }
                .into());
            }
            self.remaining_ok.fetch_sub(1, Ordering::SeqCst);
            HashedBowProvider::new(32).embed(text)
        }
        fn embed_batch(&self, texts: &[String]) -> SemaResult<Vec<Vec<f32>>> {
            texts.iter().map(|t| self.embed(t)).collect()
        }
        fn dimensions(&self) -> usize {
            32
        }
        fn name(&self) -> &str {
            "flaky-mock"
        }
        fn is_available(&self) -> bool {
            true
        }
    }

    proptest! {
        /// Resolution never fails: any input yields a finite score and
        /// an action the catalog knows (the default included).
        #[test]
        fn any_input_resolves_inside_the_catalog(input in ".{0,60}") {
            let resolver = IntentResolver::with_embeddings(
                ActionCatalog::builtin(),
                Box::new(HashedBowProvider::new(64)),
                ResolverConfig::default(),
            );
            let intent = resolver.resolve(&input);
            prop_assert!(intent.confidence.is_finite());
            prop_assert!(resolver.catalog().contains(&intent.action_name));
        }
    }

    #[test]
    fn query_embed_failure_degrades_to_keywords_per_call() {
        let catalog = weather_time_catalog();
        let provider = FlakyProvider {
            remaining_ok: AtomicUsize::new(catalog.len()),
        };
        let resolver =
            IntentResolver::with_embeddings(catalog, Box::new(provider), ResolverConfig::default());
        assert_eq!(resolver.status().mode, MatchMode::Embedding);

        // The provider's budget is spent on the index; this call's
        // embed fails and keyword scoring takes over.
        let intent = resolver.resolve("what's the weather forecast for today");
        assert_eq!(intent.action_name, "weather");
        assert!((intent.confidence - 0.5).abs() < 1e-6);
    }
}
