//! Per-page navigation state.

use crate::lookup::LookupKey;
use crate::resolver::{ListingResolver, Resolved};

/// What the page currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum PageState {
    /// A resolution is in flight.
    Loading,
    Loaded(Resolved),
    NotFound,
}

/// Handle for one navigation, returned by [`PageSession::navigate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    generation: u64,
    key: Option<LookupKey>,
}

impl Navigation {
    pub fn key(&self) -> Option<&LookupKey> {
        self.key.as_ref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Tracks the current navigation of a detail page.
///
/// Each navigation bumps the generation; a resolution finished for an
/// older generation is dropped so it cannot replace the current listing.
#[derive(Debug, Clone)]
pub struct PageSession {
    generation: u64,
    key: Option<LookupKey>,
    state: PageState,
}

impl Default for PageSession {
    fn default() -> Self {
        Self::new()
    }
}

impl PageSession {
    pub fn new() -> Self {
        Self {
            generation: 0,
            key: None,
            state: PageState::Loading,
        }
    }

    /// Start a navigation. The page is loading until the result is applied.
    pub fn navigate(&mut self, key: Option<LookupKey>) -> Navigation {
        self.generation += 1;
        self.key = key.clone();
        self.state = PageState::Loading;
        Navigation {
            generation: self.generation,
            key,
        }
    }

    /// Apply the outcome of `navigation`. Returns false, leaving the state
    /// untouched, when a newer navigation has started since.
    pub fn complete(&mut self, navigation: &Navigation, outcome: Option<Resolved>) -> bool {
        if !self.is_current(navigation) {
            return false;
        }
        self.state = match outcome {
            Some(resolved) => PageState::Loaded(resolved),
            None => PageState::NotFound,
        };
        true
    }

    /// Navigate to `key` and resolve it.
    pub async fn load(&mut self, resolver: &ListingResolver, key: Option<LookupKey>) -> &PageState {
        let navigation = self.navigate(key);
        let outcome = resolver.resolve_opt(navigation.key()).await;
        self.complete(&navigation, outcome);
        &self.state
    }

    pub fn is_current(&self, navigation: &Navigation) -> bool {
        navigation.generation == self.generation
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    pub fn key(&self) -> Option<&LookupKey> {
        self.key.as_ref()
    }

    /// The loaded listing's resolution, if any.
    pub fn current(&self) -> Option<&Resolved> {
        match &self.state {
            PageState::Loaded(resolved) => Some(resolved),
            PageState::Loading | PageState::NotFound => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::tests::resolver_with_sink;
    use crate::resolver::ResolvedFrom;
    use futures::executor::block_on;
    use market_catalog::MockCollection;
    use market_observability::LogSink;

    fn resolved(id: &str) -> Resolved {
        let listing = MockCollection::load().unwrap().find_by_id(id).unwrap().clone();
        Resolved {
            listing,
            source: ResolvedFrom::Mock,
        }
    }

    #[test]
    fn test_stale_resolution_discarded() {
        let mut session = PageSession::new();
        let first = session.navigate(Some(LookupKey::Id("1".into())));
        let second = session.navigate(Some(LookupKey::Id("2".into())));

        assert!(session.complete(&second, Some(resolved("2"))));
        assert!(!session.complete(&first, Some(resolved("1"))));
        assert_eq!(session.current().unwrap().listing.id.as_str(), "2");
        assert_eq!(session.key(), Some(&LookupKey::Id("2".into())));
    }

    #[test]
    fn test_stale_resolution_does_not_clear_loading() {
        let mut session = PageSession::new();
        let first = session.navigate(Some(LookupKey::Id("1".into())));
        let _second = session.navigate(Some(LookupKey::Id("2".into())));
        assert!(!session.complete(&first, None));
        assert_eq!(session.state(), &PageState::Loading);
    }

    #[test]
    fn test_load_not_found_without_key() {
        let resolver = resolver_with_sink(LogSink::memory());
        let mut session = PageSession::new();
        assert_eq!(block_on(session.load(&resolver, None)), &PageState::NotFound);
    }

    #[test]
    fn test_load_then_reload() {
        let resolver = resolver_with_sink(LogSink::memory());
        let mut session = PageSession::new();
        block_on(session.load(&resolver, Some(LookupKey::Id("1".into()))));
        assert_eq!(session.current().unwrap().listing.id.as_str(), "1");

        block_on(session.load(&resolver, Some(LookupKey::Id("missing".into()))));
        assert_eq!(session.state(), &PageState::NotFound);
        assert!(session.current().is_none());
    }
}
