//! Facility locator command.

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use gramin_core::location::LocationProvider;
use gramin_core::locator::{FacilityLocator, LocatorView};
use gramin_infra::geo::{FixedLocationProvider, HttpLocationProvider};
use gramin_types::location::Coordinate;

use crate::state::AppState;

/// Locate nearby facilities, either around an explicit coordinate or
/// around the provider-reported position.
pub async fn run_locate(
    state: &AppState,
    lat: Option<f64>,
    lon: Option<f64>,
    json: bool,
) -> Result<()> {
    match (lat, lon) {
        (Some(lat), Some(lon)) => {
            let coordinate = Coordinate::new(lat, lon)?;
            let provider = FixedLocationProvider::new(coordinate);
            locate_with(state, provider, json).await
        }
        _ => {
            let provider = HttpLocationProvider::from_config(&state.config);
            locate_with(state, provider, json).await
        }
    }
}

async fn locate_with<P: LocationProvider>(state: &AppState, provider: P, json: bool) -> Result<()> {
    let mut locator = FacilityLocator::new(state.service.clone(), provider);

    if json {
        locator.locate().await;
        return render_json(&locator);
    }

    let spinner = indicatif::ProgressBar::new_spinner();
    spinner.set_style(
        indicatif::ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.set_message("scanning for nearby facilities...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));

    locator.locate().await;

    spinner.finish_and_clear();
    render(&locator);
    Ok(())
}

fn render_json<R, P>(locator: &FacilityLocator<R, P>) -> Result<()>
where
    R: gramin_core::remote::RemoteService,
    P: LocationProvider,
{
    let value = match locator.view() {
        LocatorView::Failed(message) => serde_json::json!({"error": message}),
        LocatorView::NothingFound(result) | LocatorView::Found(result) => {
            serde_json::to_value(result)?
        }
        LocatorView::Idle | LocatorView::Busy => serde_json::json!(null),
    };
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn render<R, P>(locator: &FacilityLocator<R, P>)
where
    R: gramin_core::remote::RemoteService,
    P: LocationProvider,
{
    if let Some(fix) = locator.fix() {
        println!();
        println!(
            "  {} GPS: {:.4}, {:.4}",
            style("▸").green(),
            fix.latitude(),
            fix.longitude()
        );
    }

    match locator.view() {
        LocatorView::Failed(message) => {
            println!();
            println!("  {} {}", style("!").red().bold(), style(message).red());
            println!();
        }
        LocatorView::NothingFound(_) => {
            println!();
            println!("  No specific facility data found nearby.");
            println!(
                "  {}",
                style("Try moving to an open area for better GPS or search around a larger town.")
                    .dim()
            );
            println!();
        }
        LocatorView::Found(result) => {
            println!();
            println!("  {} {}", style("★").yellow(), style("Summary").bold());
            println!("  {}", result.summary_text);

            let mut table = Table::new();
            table.load_preset(presets::UTF8_FULL_CONDENSED);
            table.set_content_arrangement(ContentArrangement::Dynamic);

            table.set_header(vec![
                Cell::new("Facility").fg(Color::White),
                Cell::new("Map").fg(Color::White),
                Cell::new("Review").fg(Color::White),
            ]);

            for facility in &result.facilities {
                table.add_row(vec![
                    Cell::new(&facility.title).fg(Color::Cyan),
                    Cell::new(&facility.map_uri),
                    Cell::new(facility.review_snippet.as_deref().unwrap_or("-"))
                        .fg(Color::DarkGrey),
                ]);
            }

            println!();
            println!("{table}");
            println!();
            println!(
                "  {} facilit{}",
                style(result.facilities.len()).bold(),
                if result.facilities.len() == 1 { "y" } else { "ies" }
            );
            println!();
        }
        LocatorView::Idle | LocatorView::Busy => {}
    }
}
