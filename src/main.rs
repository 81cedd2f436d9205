// Daily Grapher host
// Mounts one card against the calendar REST API and logs every frame

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::Local;

use dailygrapher::models::layout::CardFrame;
use dailygrapher::services::calendar_fetch::http::HttpEventSource;
use dailygrapher::services::settings::{load_settings, resolve_settings_path};
use dailygrapher::{CardHandle, DailyGrapherCard};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Daily Grapher");

    let settings_path = resolve_settings_path();
    let settings = load_settings(&settings_path)?;

    let card = DailyGrapherCard::new(settings.card, Local::now().date_naive())
        .context("Invalid card configuration")?;
    let source = HttpEventSource::new(&settings.api.base_url, settings.api.token)?;

    let handle = CardHandle::mount(card, Arc::new(source));
    let mut frames = handle.frames();

    loop {
        tokio::select! {
            changed = frames.changed() => {
                if changed.is_err() {
                    log::warn!("Card stopped publishing frames");
                    break;
                }
                let frame = frames.borrow_and_update().clone();
                match frame {
                    Some(frame) => log_frame(&frame),
                    None => log::info!("loading"),
                }
            }
            _ = tokio::signal::ctrl_c() => {
                log::info!("Shutting down");
                break;
            }
        }
    }

    if let Some(card) = handle.unmount().await {
        for failure in card.failures() {
            log::warn!("Calendar {} unavailable: {}", failure.name, failure.error);
        }
    }

    Ok(())
}

fn log_frame(frame: &CardFrame) {
    match serde_json::to_string(frame) {
        Ok(json) => log::info!("{json}"),
        Err(err) => log::error!("Failed to serialize frame: {err}"),
    }
}
