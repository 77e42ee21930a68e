//! Simulated search backend
//!
//! Stands in for a real search service: every query resolves to a fixed
//! match set after an artificial settle delay. What matters and is meant
//! to survive a real backend swap is the issuing contract: each search
//! carries a monotonically increasing generation token, and the caller
//! commits a settled result only when its token is still the latest one
//! issued. Stale completions are discarded, never written over a newer
//! in-flight search.

use std::time::Duration;

use crate::types::Article;

/// Artificial latency standing in for a backend round-trip
pub const DEFAULT_SETTLE_DELAY: Duration = Duration::from_millis(500);

/// Generation token identifying one issued search
pub type SearchToken = u64;

/// Outcome of a settled search, tagged with the token it was issued under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchSettled {
    pub token: SearchToken,
    pub query: String,
    pub results: Vec<Article>,
}

/// The simulated backend: a fixed match set plus a settle delay
#[derive(Debug, Clone)]
pub struct SearchService {
    matches: Vec<Article>,
    settle_delay: Duration,
}

impl SearchService {
    pub fn new(matches: Vec<Article>, settle_delay: Duration) -> Self {
        Self {
            matches,
            settle_delay,
        }
    }

    pub fn settle_delay(&self) -> Duration {
        self.settle_delay
    }

    /// The result set a settled query resolves to
    ///
    /// Non-empty queries hit the fixed match set; a blank query resolves
    /// to nothing. Callers short-circuit blank queries synchronously and
    /// never enter the searching state for them.
    pub fn results_for(&self, query: &str) -> Vec<Article> {
        if query.trim().is_empty() {
            Vec::new()
        } else {
            self.matches.clone()
        }
    }

    /// Wait out the settle delay, then produce the outcome for `query`
    ///
    /// The returned value carries `token` back unchanged; committing or
    /// discarding it is the caller's decision.
    pub async fn settle(&self, token: SearchToken, query: String) -> SearchSettled {
        tokio::time::sleep(self.settle_delay).await;

        let results = self.results_for(&query);
        SearchSettled {
            token,
            query,
            results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn service() -> SearchService {
        let catalog = Catalog::builtin().unwrap();
        SearchService::new(catalog.search_matches().to_vec(), Duration::from_millis(10))
    }

    #[test]
    fn test_results_for_nonempty_query() {
        let service = service();
        let results = service.results_for("metallica");

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id, "6");
    }

    #[test]
    fn test_results_for_blank_query() {
        let service = service();

        assert!(service.results_for("").is_empty());
        assert!(service.results_for("   ").is_empty());
    }

    #[test]
    fn test_results_are_query_independent() {
        // The simulated backend returns the same match set for any
        // non-blank query; only the token discipline differs per query.
        let service = service();

        assert_eq!(service.results_for("iron"), service.results_for("tool"));
    }

    #[tokio::test]
    async fn test_settle_carries_token_and_query() {
        let service = service();
        let settled = service.settle(42, "megadeth".to_string()).await;

        assert_eq!(settled.token, 42);
        assert_eq!(settled.query, "megadeth");
        assert_eq!(settled.results.len(), 2);
    }

    #[tokio::test]
    async fn test_settle_blank_query_resolves_empty() {
        let service = service();
        let settled = service.settle(7, "  ".to_string()).await;

        assert_eq!(settled.token, 7);
        assert!(settled.results.is_empty());
    }
}
