//! Service layer adapter for the TUI
//!
//! Bridges the async side (settle timers, asset loads) into the
//! synchronous event loop. A `ServiceHandle` owns a tokio runtime and a
//! crossbeam sender; spawned tasks report back as [`ServiceEvent`]s,
//! which the loop drains and feeds to the reducer as actions.

use std::sync::Arc;

use crossbeam_channel::{unbounded, Receiver, Sender};
use libriffwire::assets::AssetLoader;
use libriffwire::search::{SearchService, SearchSettled, SearchToken};

use crate::app::Action;
use crate::error::Result;

/// Completions arriving from the async side
#[derive(Debug, Clone)]
pub enum ServiceEvent {
    /// The startup asset load finished; `None` means it failed or there
    /// was nothing to load. The app proceeds either way.
    AssetsLoaded { banner: Option<String> },

    /// A settle timer fired for the search it was issued under
    SearchSettled(SearchSettled),
}

impl From<ServiceEvent> for Action {
    fn from(event: ServiceEvent) -> Self {
        match event {
            ServiceEvent::AssetsLoaded { banner } => Action::AssetsLoaded { banner },
            ServiceEvent::SearchSettled(settled) => Action::SearchSettled(settled),
        }
    }
}

/// Handle over the async services
///
/// All spawned work is fire-and-forget: there is no cancellation API.
/// Superseded searches are not cancelled, they are discarded on arrival
/// by the reducer's token check.
pub struct ServiceHandle {
    runtime: tokio::runtime::Runtime,
    search: Arc<SearchService>,
    assets: Arc<AssetLoader>,
    events_tx: Sender<ServiceEvent>,
}

impl ServiceHandle {
    /// Create a service handle and the receiver the event loop drains
    pub fn new(
        search: SearchService,
        assets: AssetLoader,
    ) -> Result<(Self, Receiver<ServiceEvent>)> {
        let runtime = tokio::runtime::Runtime::new()?;
        let (events_tx, events_rx) = unbounded();

        let handle = Self {
            runtime,
            search: Arc::new(search),
            assets: Arc::new(assets),
            events_tx,
        };

        Ok((handle, events_rx))
    }

    /// Kick off the startup asset load
    ///
    /// Always completes with an `AssetsLoaded` event, success or not.
    pub fn load_assets(&self) {
        let assets = Arc::clone(&self.assets);
        let tx = self.events_tx.clone();

        self.runtime.spawn(async move {
            let banner = assets.load().await;
            if tx.send(ServiceEvent::AssetsLoaded { banner }).is_err() {
                tracing::debug!("service event receiver dropped during boot");
            }
        });
    }

    /// Start the settle timer for a freshly issued search
    pub fn search(&self, token: SearchToken, query: String) {
        let search = Arc::clone(&self.search);
        let tx = self.events_tx.clone();

        self.runtime.spawn(async move {
            let settled = search.settle(token, query).await;
            if tx.send(ServiceEvent::SearchSettled(settled)).is_err() {
                tracing::debug!("service event receiver dropped, settle discarded");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libriffwire::Catalog;
    use std::time::Duration;

    fn handle() -> (ServiceHandle, Receiver<ServiceEvent>) {
        let catalog = Catalog::builtin().unwrap();
        let search = SearchService::new(catalog.search_matches().to_vec(), Duration::from_millis(10));
        let assets = AssetLoader::new(None);
        ServiceHandle::new(search, assets).unwrap()
    }

    #[test]
    fn test_load_assets_completes_without_banner() {
        let (services, rx) = handle();
        services.load_assets();

        let event = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        match event {
            ServiceEvent::AssetsLoaded { banner } => assert!(banner.is_none()),
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_search_settles_with_token() {
        let (services, rx) = handle();
        services.search(3, "megadeth".to_string());

        let event = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        match event {
            ServiceEvent::SearchSettled(settled) => {
                assert_eq!(settled.token, 3);
                assert_eq!(settled.results.len(), 2);
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[test]
    fn test_superseded_searches_all_settle() {
        // The service never cancels; both settles arrive and the reducer
        // is the one to discard the stale one.
        let (services, rx) = handle();
        services.search(1, "iron".to_string());
        services.search(2, "tool".to_string());

        let mut tokens = vec![];
        for _ in 0..2 {
            if let ServiceEvent::SearchSettled(s) = rx.recv_timeout(Duration::from_secs(2)).unwrap()
            {
                tokens.push(s.token);
            }
        }
        tokens.sort();
        assert_eq!(tokens, vec![1, 2]);
    }
}
