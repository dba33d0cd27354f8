use clap::Parser;
use indexmap::IndexMap;
use tracing::{debug, info, warn};
use url::Url;

use salary_app::charts::{ChartHandle, ChartKind, ChartRenderer, ChartSlot, ChartSpec};
use salary_app::{EstimatorApp, ResultArea, logging};
use salary_client::{ClientConfig, EstimatorClient};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Multi-country salary and tax estimator.
///
/// Talks to the estimator service, resolves the location cascade for the
/// requested country, and prints the tax breakdown with text charts.
#[derive(Debug, Parser)]
struct Cli {
    /// Country to estimate for, as listed by the service.
    country: String,

    /// Annual gross income.
    #[arg(long)]
    income: f64,

    /// Base URL of the estimator service.
    #[arg(long, default_value = "http://127.0.0.1:5000")]
    api_url: Url,

    /// State or province. Optional when the country has only one.
    #[arg(long)]
    state: Option<String>,

    /// City. Optional when the state has only one.
    #[arg(long)]
    city: Option<String>,

    /// Tax year. Defaults to the newest year the service offers.
    #[arg(long)]
    tax_year: Option<String>,

    /// Estimate as a non-resident.
    #[arg(long)]
    non_resident: bool,

    /// Age, used for Singapore CPF rates.
    #[arg(long)]
    age: Option<u32>,

    /// 401(k) contribution as a percentage of income (United States).
    #[arg(long, value_name = "PERCENT")]
    contribution: Option<f64>,

    /// Employer 401(k) match percentage (United States).
    #[arg(long, value_name = "PERCENT")]
    employer_match: Option<f64>,

    /// Cap on the employer match, as a percentage of income (United States).
    #[arg(long, value_name = "PERCENT")]
    employer_match_limit: Option<f64>,
}

// ─── text chart backend ──────────────────────────────────────────────────────

const BAR_WIDTH: usize = 40;

struct TextChart;

impl ChartHandle for TextChart {
    fn destroy(&mut self) {}
}

/// Renders chart datasets as labeled bars on stdout.
struct TextRenderer;

impl ChartRenderer for TextRenderer {
    type Handle = TextChart;

    fn render(&mut self, _slot: ChartSlot, spec: &ChartSpec) -> TextChart {
        println!("\n{}", spec.title);

        // Doughnut slices scale against their sum, bars against 100%.
        let scale = match spec.kind {
            ChartKind::Doughnut => spec.dataset.values.iter().sum::<f64>(),
            ChartKind::Bar => 100.0,
        };

        for (label, value) in spec.dataset.labels.iter().zip(&spec.dataset.values) {
            let filled = if scale > 0.0 {
                ((value / scale) * BAR_WIDTH as f64).round() as usize
            } else {
                0
            };
            let suffix = match spec.kind {
                ChartKind::Doughnut => format!("{value:.2}"),
                ChartKind::Bar => format!("{value:.1}%"),
            };
            println!(
                "  {label:<28} {:<BAR_WIDTH$} {suffix}",
                "#".repeat(filled.min(BAR_WIDTH))
            );
        }
        TextChart
    }
}

// ─── form assembly ───────────────────────────────────────────────────────────

/// Builds the flattened form record in form order. Country-specific inputs
/// are only included when their group is visible for the selection.
fn build_form(cli: &Cli, app: &EstimatorApp<TextRenderer>) -> IndexMap<String, String> {
    let mut form = IndexMap::new();
    form.insert("country".into(), cli.country.clone());
    form.insert("income".into(), cli.income.to_string());
    form.insert(
        "state".into(),
        app.cascade.state().unwrap_or_default().to_string(),
    );
    form.insert(
        "city".into(),
        app.cascade.city().unwrap_or_default().to_string(),
    );
    if let Some(year) = cli
        .tax_year
        .clone()
        .or_else(|| app.tax_year_selector.options.first().cloned())
    {
        form.insert("tax-year".into(), year);
    }
    form.insert(
        "residency-status".into(),
        if cli.non_resident {
            "non-resident".into()
        } else {
            "resident".into()
        },
    );

    let visibility = app.field_visibility();
    if visibility.singapore {
        if let Some(age) = cli.age {
            form.insert("age".into(), age.to_string());
        }
    }
    if visibility.united_states {
        if let Some(percent) = cli.contribution {
            form.insert("401k-contribution".into(), percent.to_string());
        }
        if let Some(percent) = cli.employer_match {
            form.insert("employer-match".into(), percent.to_string());
        }
        if let Some(percent) = cli.employer_match_limit {
            form.insert("employer-match-limit".into(), percent.to_string());
        }
    }
    form
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init();

    let cli = Cli::parse();

    let client = EstimatorClient::new(ClientConfig::new(cli.api_url.clone()))?;
    let mut app = EstimatorApp::new(client, TextRenderer);

    if app.load_catalog().await.is_none() {
        anyhow::bail!("estimator service at {} is unreachable", cli.api_url);
    }

    if !app
        .country_selector
        .options
        .iter()
        .any(|c| c == &cli.country)
    {
        warn!(country = %cli.country, "country not offered by the service");
    }

    app.on_residency_changed(if cli.non_resident {
        "non-resident"
    } else {
        "resident"
    });
    app.on_country_changed(&cli.country).await;

    if let Some(state) = &cli.state {
        app.cascade.on_state_changed(state).await;
    }
    if let Some(city) = &cli.city {
        app.cascade.on_city_changed(city);
    }
    debug!(
        state = app.cascade.state(),
        city = app.cascade.city(),
        "location resolved"
    );

    let form = build_form(&cli, &app);
    match app.submit(form).await {
        ResultArea::Shown(presentation) => {
            println!("Tax estimate for {}", cli.country);
            for row in &presentation.rows {
                println!("  {:<28} {:>14}", row.label, row.formatted_value);
            }
            info!("estimate complete");
            Ok(())
        }
        ResultArea::Failed(message) => anyhow::bail!("{message}"),
        ResultArea::Empty => unreachable!("submit always resolves the result area"),
    }
}
