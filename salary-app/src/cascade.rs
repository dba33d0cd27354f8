//! Cascading country → state → city resolution.
//!
//! Keeps the three-level dependent selection consistent with the
//! server-provided option lists. Each level is fetched asynchronously and
//! applied only on completion; the resolver never writes speculative values
//! into a selector, and it never triggers tax computation itself.
//!
//! Completions are guarded by per-level request tokens: beginning a new
//! request invalidates every outstanding one for that level (and, for
//! country changes, for the city level below it), so a slow response that
//! arrives after the user has already moved on is discarded instead of
//! overwriting newer selector contents.

use async_trait::async_trait;
use salary_client::{ApiError, EstimatorClient};
use tracing::{debug, warn};

use crate::selector::Selector;

/// Source of the dependent option lists.
///
/// The production implementation is [`EstimatorClient`]; tests use
/// in-memory fakes.
#[async_trait]
pub trait OptionSource: Send + Sync {
    async fn states(&self, country: &str) -> Result<Vec<String>, ApiError>;
    async fn cities(&self, country: &str, state: &str) -> Result<Vec<String>, ApiError>;
}

#[async_trait]
impl OptionSource for EstimatorClient {
    async fn states(&self, country: &str) -> Result<Vec<String>, ApiError> {
        self.get_states(country).await
    }

    async fn cities(&self, country: &str, state: &str) -> Result<Vec<String>, ApiError> {
        self.get_cities(country, state).await
    }
}

/// Identifies one issued list request. Only the most recently issued token
/// per level is accepted at apply time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// What happened when a fetched list was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListOutcome {
    /// The list was current and the selector was repopulated.
    /// `auto_selected` carries the single entry when the level collapsed.
    Applied { auto_selected: Option<String> },
    /// A newer request had been issued in the meantime; nothing changed.
    Stale,
}

/// The location cascade state machine.
#[derive(Debug)]
pub struct LocationCascade<S> {
    source: S,
    country: String,
    pub state_selector: Selector,
    pub city_selector: Selector,
    state_requests: u64,
    city_requests: u64,
}

impl<S: OptionSource> LocationCascade<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            country: String::new(),
            state_selector: Selector::default(),
            city_selector: Selector::default(),
            state_requests: 0,
            city_requests: 0,
        }
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn state(&self) -> Option<&str> {
        self.state_selector.selected()
    }

    pub fn city(&self) -> Option<&str> {
        self.city_selector.selected()
    }

    /// Handles a country selection.
    ///
    /// Clearing the country hides both dependent selectors. Otherwise the
    /// state list is fetched and applied; a single-entry list auto-selects,
    /// disables the selector, and immediately resolves cities for that
    /// state. Fetch failures are logged and leave the section hidden; the
    /// user can reselect to retry.
    pub async fn on_country_changed(&mut self, country: &str) {
        self.country = country.to_string();
        self.state_selector.hide();
        self.city_selector.hide();
        if country.is_empty() {
            // Nothing to resolve, but outstanding completions must not
            // repopulate the selectors we just hid.
            self.state_requests += 1;
            self.city_requests += 1;
            return;
        }

        let token = self.begin_state_request();
        match self.source.states(country).await {
            Ok(states) => {
                if let ListOutcome::Applied {
                    auto_selected: Some(state),
                } = self.apply_state_list(token, states)
                {
                    self.load_cities(country, &state).await;
                }
            }
            Err(error) => {
                warn!(country, %error, "state list fetch failed; selector stays hidden");
            }
        }
    }

    /// Handles a state selection. An empty state (the unselected entry)
    /// hides the city selector; otherwise cities are resolved for the
    /// current (country, state) pair.
    pub async fn on_state_changed(&mut self, state: &str) {
        if self.country.is_empty() || state.is_empty() {
            self.state_selector.value = None;
            self.city_selector.hide();
            self.city_requests += 1;
            return;
        }
        self.state_selector.value = Some(state.to_string());

        let country = self.country.clone();
        self.load_cities(&country, state).await;
    }

    /// City is the leaf of the cascade; selecting one has no downstream
    /// effect.
    pub fn on_city_changed(&mut self, city: &str) {
        self.city_selector.value = if city.is_empty() {
            None
        } else {
            Some(city.to_string())
        };
    }

    /// Issues a state-list request token. Invalidates any outstanding state
    /// request, and any outstanding city request, since its parent level is
    /// about to change.
    pub fn begin_state_request(&mut self) -> RequestToken {
        self.state_requests += 1;
        self.city_requests += 1;
        RequestToken(self.state_requests)
    }

    /// Applies a fetched state list, unless the token is stale.
    ///
    /// The selector is shown with the options in service order behind the
    /// leading unselected entry. Exactly one entry collapses the level;
    /// zero entries behave like "more than one" (selector enabled, only the
    /// unselected entry to pick) — a pass-through, not an error.
    pub fn apply_state_list(&mut self, token: RequestToken, states: Vec<String>) -> ListOutcome {
        if token.0 != self.state_requests {
            debug!(?token, "stale state list discarded");
            return ListOutcome::Stale;
        }

        self.state_selector.populate(states);
        self.city_selector.hide();

        if self.state_selector.options.len() == 1 {
            let only = self.state_selector.options[0].clone();
            self.state_selector.collapse_to(only.clone());
            ListOutcome::Applied {
                auto_selected: Some(only),
            }
        } else {
            ListOutcome::Applied {
                auto_selected: None,
            }
        }
    }

    /// Issues a city-list request token, invalidating any outstanding one.
    pub fn begin_city_request(&mut self) -> RequestToken {
        self.city_requests += 1;
        RequestToken(self.city_requests)
    }

    /// Applies a fetched city list with the same auto-collapse rule as
    /// states. A collapsed city is the end of the chain.
    pub fn apply_city_list(&mut self, token: RequestToken, cities: Vec<String>) -> ListOutcome {
        if token.0 != self.city_requests {
            debug!(?token, "stale city list discarded");
            return ListOutcome::Stale;
        }

        self.city_selector.populate(cities);

        if self.city_selector.options.len() == 1 {
            let only = self.city_selector.options[0].clone();
            self.city_selector.collapse_to(only.clone());
            ListOutcome::Applied {
                auto_selected: Some(only),
            }
        } else {
            ListOutcome::Applied {
                auto_selected: None,
            }
        }
    }

    async fn load_cities(&mut self, country: &str, state: &str) {
        let token = self.begin_city_request();
        match self.source.cities(country, state).await {
            Ok(cities) => {
                let _ = self.apply_city_list(token, cities);
            }
            Err(error) => {
                warn!(country, state, %error, "city list fetch failed; selector stays hidden");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use pretty_assertions::assert_eq;

    use super::*;

    /// In-memory option source that records every fetch it serves.
    #[derive(Default)]
    struct FakeSource {
        states: HashMap<String, Vec<String>>,
        cities: HashMap<(String, String), Vec<String>>,
        calls: Mutex<Vec<String>>,
    }

    impl FakeSource {
        fn with_states(mut self, country: &str, states: &[&str]) -> Self {
            self.states.insert(
                country.to_string(),
                states.iter().map(|s| s.to_string()).collect(),
            );
            self
        }

        fn with_cities(mut self, country: &str, state: &str, cities: &[&str]) -> Self {
            self.cities.insert(
                (country.to_string(), state.to_string()),
                cities.iter().map(|s| s.to_string()).collect(),
            );
            self
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl OptionSource for &FakeSource {
        async fn states(&self, country: &str) -> Result<Vec<String>, ApiError> {
            self.calls.lock().unwrap().push(format!("states:{country}"));
            self.states.get(country).cloned().ok_or(ApiError::Api {
                endpoint: format!("GET /api/get_states/{country}"),
                status: 400,
                body: "Country not supported".into(),
            })
        }

        async fn cities(&self, country: &str, state: &str) -> Result<Vec<String>, ApiError> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("cities:{country}/{state}"));
            self.cities
                .get(&(country.to_string(), state.to_string()))
                .cloned()
                .ok_or(ApiError::Api {
                    endpoint: format!("GET /api/get_cities/{country}/{state}"),
                    status: 400,
                    body: "Country not supported".into(),
                })
        }
    }

    #[tokio::test]
    async fn single_state_auto_collapses_and_resolves_cities() {
        let source = FakeSource::default()
            .with_states("Singapore", &["Singapore"])
            .with_cities("Singapore", "Singapore", &["Singapore"]);
        let mut cascade = LocationCascade::new(&source);

        cascade.on_country_changed("Singapore").await;

        assert_eq!(cascade.state(), Some("Singapore"));
        assert!(cascade.state_selector.visible);
        assert!(!cascade.state_selector.enabled);

        // City resolution was triggered automatically and collapsed too.
        assert_eq!(cascade.city(), Some("Singapore"));
        assert!(!cascade.city_selector.enabled);
        assert_eq!(
            source.calls(),
            ["states:Singapore", "cities:Singapore/Singapore"]
        );
    }

    #[tokio::test]
    async fn multiple_states_stay_enabled_without_city_request() {
        let source =
            FakeSource::default().with_states("United States", &["Alabama", "Alaska", "Arizona"]);
        let mut cascade = LocationCascade::new(&source);

        cascade.on_country_changed("United States").await;

        assert!(cascade.state_selector.visible);
        assert!(cascade.state_selector.enabled);
        assert_eq!(cascade.state(), None);
        assert_eq!(cascade.state_selector.options.len(), 3);

        assert!(!cascade.city_selector.visible);
        assert_eq!(source.calls(), ["states:United States"]);
    }

    #[tokio::test]
    async fn empty_state_list_behaves_like_many() {
        let source = FakeSource::default().with_states("Vatican", &[]);
        let mut cascade = LocationCascade::new(&source);

        cascade.on_country_changed("Vatican").await;

        assert!(cascade.state_selector.visible);
        assert!(cascade.state_selector.enabled);
        assert!(cascade.state_selector.options.is_empty());
        assert!(!cascade.city_selector.visible);
    }

    #[tokio::test]
    async fn clearing_country_hides_dependent_selectors() {
        let source = FakeSource::default()
            .with_states("Singapore", &["Singapore"])
            .with_cities("Singapore", "Singapore", &["Singapore"]);
        let mut cascade = LocationCascade::new(&source);
        cascade.on_country_changed("Singapore").await;

        cascade.on_country_changed("").await;

        assert_eq!(cascade.state_selector, Selector::default());
        assert_eq!(cascade.city_selector, Selector::default());
        assert_eq!(source.calls(), ["states:Singapore", "cities:Singapore/Singapore"]);
    }

    #[tokio::test]
    async fn switching_country_clears_prior_state_and_city() {
        let source = FakeSource::default()
            .with_states("Singapore", &["Singapore"])
            .with_cities("Singapore", "Singapore", &["Singapore"])
            .with_states("United States", &["Alabama", "Alaska"]);
        let mut cascade = LocationCascade::new(&source);
        cascade.on_country_changed("Singapore").await;
        assert_eq!(cascade.city(), Some("Singapore"));

        cascade.on_country_changed("United States").await;

        assert_eq!(cascade.state(), None);
        assert_eq!(cascade.city(), None);
        assert!(!cascade.city_selector.visible);
        assert_eq!(cascade.state_selector.options, ["Alabama", "Alaska"]);
    }

    #[tokio::test]
    async fn state_selection_resolves_cities_with_auto_collapse() {
        let source = FakeSource::default()
            .with_states("China", &["Beijing", "Shanghai", "Other"])
            .with_cities("China", "Beijing", &["Beijing"]);
        let mut cascade = LocationCascade::new(&source);
        cascade.on_country_changed("China").await;

        cascade.on_state_changed("Beijing").await;

        assert_eq!(cascade.state(), Some("Beijing"));
        assert_eq!(cascade.city(), Some("Beijing"));
        assert!(!cascade.city_selector.enabled);
    }

    #[tokio::test]
    async fn unselecting_state_hides_cities() {
        let source = FakeSource::default()
            .with_states("China", &["Beijing", "Shanghai", "Other"])
            .with_cities("China", "Beijing", &["Beijing"]);
        let mut cascade = LocationCascade::new(&source);
        cascade.on_country_changed("China").await;
        cascade.on_state_changed("Beijing").await;

        cascade.on_state_changed("").await;

        assert_eq!(cascade.state(), None);
        assert!(!cascade.city_selector.visible);
    }

    #[tokio::test]
    async fn fetch_failure_is_swallowed_and_leaves_section_hidden() {
        let source = FakeSource::default();
        let mut cascade = LocationCascade::new(&source);

        cascade.on_country_changed("Atlantis").await;

        assert!(!cascade.state_selector.visible);
        assert!(!cascade.city_selector.visible);
    }

    #[tokio::test]
    async fn stale_state_list_is_discarded() {
        let source = FakeSource::default();
        let mut cascade = LocationCascade::new(&source);

        // Two requests issued back to back; the first completes last.
        let first = cascade.begin_state_request();
        let second = cascade.begin_state_request();

        let outcome = cascade.apply_state_list(second, vec!["Beijing".into(), "Other".into()]);
        assert_eq!(
            outcome,
            ListOutcome::Applied {
                auto_selected: None
            }
        );

        let outcome = cascade.apply_state_list(first, vec!["Alabama".into()]);
        assert_eq!(outcome, ListOutcome::Stale);

        // The newer list survived.
        assert_eq!(cascade.state_selector.options, ["Beijing", "Other"]);
    }

    #[tokio::test]
    async fn new_state_request_invalidates_outstanding_city_request() {
        let source = FakeSource::default();
        let mut cascade = LocationCascade::new(&source);

        let city_token = cascade.begin_city_request();
        let state_token = cascade.begin_state_request();

        // The state list for the new country lands first...
        let _ = cascade.apply_state_list(state_token, vec!["Alabama".into(), "Alaska".into()]);
        // ...then the old country's city list straggles in.
        let outcome = cascade.apply_city_list(city_token, vec!["Old City".into()]);

        assert_eq!(outcome, ListOutcome::Stale);
        assert!(!cascade.city_selector.visible);
    }

    #[tokio::test]
    async fn city_change_is_a_leaf() {
        let source = FakeSource::default()
            .with_states("United States", &["Alabama", "Alaska"])
            .with_cities("United States", "Alabama", &["Birmingham", "Mobile"]);
        let mut cascade = LocationCascade::new(&source);
        cascade.on_country_changed("United States").await;
        cascade.on_state_changed("Alabama").await;

        cascade.on_city_changed("Mobile");

        assert_eq!(cascade.city(), Some("Mobile"));
        // No further fetches beyond the two list loads.
        assert_eq!(
            source.calls(),
            ["states:United States", "cities:United States/Alabama"]
        );
    }
}
