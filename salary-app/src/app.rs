//! Top-level application state.
//!
//! [`EstimatorApp`] wires the pieces together: catalog-backed country and
//! tax-year selectors, the location cascade, residency-driven field
//! visibility, and the submit → presentation → chart flow. It holds no tax
//! logic of its own; every amount on screen comes back from the service.

use indexmap::IndexMap;

use salary_client::{CalculationRequest, EstimatorClient, OptionCatalog};
use salary_core::{Country, FieldVisibility, ResultPresentation};
use tracing::{debug, warn};

use crate::cascade::LocationCascade;
use crate::charts::{ChartRenderer, ChartSlot, ChartSlots, ChartSpec};
use crate::selector::Selector;

const BREAKDOWN_CHART_TITLE: &str = "Income Breakdown";
const CONTRIBUTION_CHART_TITLE: &str = "Additional Compensation";

/// Message shown when the service rejected the submission.
pub const CALCULATION_ERROR: &str = "Error calculating tax";
/// Message shown when the service could not be reached or understood.
pub const GENERIC_ERROR: &str = "An error occurred";

/// What the result area currently shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ResultArea {
    #[default]
    Empty,
    Shown(ResultPresentation),
    /// A user-facing message; never a raw error chain.
    Failed(String),
}

/// The estimator application.
///
/// Generic over the chart backend so logic tests can count render and
/// destroy calls without drawing anything.
pub struct EstimatorApp<R: ChartRenderer> {
    client: EstimatorClient,
    renderer: R,
    slots: ChartSlots<R::Handle>,
    pub country_selector: Selector,
    pub tax_year_selector: Selector,
    pub cascade: LocationCascade<EstimatorClient>,
    catalog: Option<OptionCatalog>,
    is_resident: bool,
    result: ResultArea,
}

impl<R: ChartRenderer> EstimatorApp<R> {
    pub fn new(client: EstimatorClient, renderer: R) -> Self {
        Self {
            cascade: LocationCascade::new(client.clone()),
            client,
            renderer,
            slots: ChartSlots::new(),
            country_selector: Selector::default(),
            tax_year_selector: Selector::default(),
            catalog: None,
            // Matches the form's default residency selection.
            is_resident: true,
            result: ResultArea::default(),
        }
    }

    /// Fetches the option catalog and populates the country and tax-year
    /// selectors. A failure leaves both selectors empty and is logged; the
    /// rest of the app stays usable.
    pub async fn load_catalog(&mut self) -> Option<&OptionCatalog> {
        match self.client.get_options().await {
            Ok(catalog) => {
                self.country_selector.populate(catalog.countries.clone());
                self.tax_year_selector.populate(catalog.tax_years.clone());
                debug!(
                    countries = catalog.countries.len(),
                    tax_years = catalog.tax_years.len(),
                    "option catalog loaded"
                );
                self.catalog = Some(catalog);
            }
            Err(error) => {
                warn!(%error, "option catalog fetch failed");
            }
        }
        self.catalog.as_ref()
    }

    /// Handles a country selection: drives the location cascade and
    /// recomputes field visibility.
    pub async fn on_country_changed(&mut self, country: &str) {
        self.country_selector.value = if country.is_empty() {
            None
        } else {
            Some(country.to_string())
        };
        self.cascade.on_country_changed(country).await;
    }

    /// Handles a residency change, from the raw form value.
    pub fn on_residency_changed(&mut self, value: &str) {
        self.is_resident = value == salary_client::types::RESIDENT_VALUE;
    }

    pub fn is_resident(&self) -> bool {
        self.is_resident
    }

    /// Country-specific input groups visible for the current selection.
    /// Recomputed in full on every call; nothing is toggled incrementally.
    pub fn field_visibility(&self) -> FieldVisibility {
        let country = self
            .country_selector
            .selected()
            .map(Country::from_discriminator)
            .unwrap_or(Country::Unknown);
        FieldVisibility::derive(country, self.is_resident)
    }

    /// Submits the flattened form record and rebuilds the result area.
    ///
    /// Success replaces the breakdown rows and both charts, destroying the
    /// previous chart handles. A service rejection or transport failure
    /// clears the charts and shows the corresponding message.
    pub async fn submit(&mut self, form: IndexMap<String, String>) -> &ResultArea {
        let request = CalculationRequest::from_form(form);

        match self.client.calculate(&request).await {
            Ok(result) => {
                let presentation = ResultPresentation::from_result(&result);
                self.render_charts(&presentation);
                self.result = ResultArea::Shown(presentation);
            }
            Err(error) => {
                let message = if error.is_status_error() {
                    CALCULATION_ERROR
                } else {
                    GENERIC_ERROR
                };
                warn!(%error, "calculation failed");
                self.slots.clear();
                self.result = ResultArea::Failed(message.to_string());
            }
        }
        &self.result
    }

    pub fn result(&self) -> &ResultArea {
        &self.result
    }

    pub fn charts(&self) -> &ChartSlots<R::Handle> {
        &self.slots
    }

    fn render_charts(&mut self, presentation: &ResultPresentation) {
        let breakdown = if presentation.composition.is_empty() {
            None
        } else {
            let spec = ChartSpec::doughnut(BREAKDOWN_CHART_TITLE, presentation.composition.clone());
            Some(self.renderer.render(ChartSlot::Breakdown, &spec))
        };
        self.slots.replace(ChartSlot::Breakdown, breakdown);

        let contribution = presentation.contribution.as_ref().map(|dataset| {
            let spec = ChartSpec::bar(CONTRIBUTION_CHART_TITLE, dataset.clone());
            self.renderer
                .render(ChartSlot::AdditionalCompensation, &spec)
        });
        self.slots
            .replace(ChartSlot::AdditionalCompensation, contribution);
    }
}
