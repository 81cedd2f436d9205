//! Calendar source access.
//!
//! Every configured source is fetched concurrently and the results are
//! joined once all of them have settled. A failing source contributes no
//! events and never blocks or cancels its siblings.

pub mod http;

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tokio::task::JoinSet;

use crate::models::config::EntityRef;
use crate::models::raw_event::RawEvent;
use crate::utils::date::DayWindow;

/// Capability to list the raw events of one calendar for a day window.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventSource: Send + Sync {
    async fn fetch_events(&self, entity_id: &str, window: DayWindow) -> Result<Vec<RawEvent>>;
}

/// A calendar that could not be fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFailure {
    pub name: String,
    pub error: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchOutcome {
    pub events: Vec<RawEvent>,
    pub failures: Vec<SourceFailure>,
}

impl FetchOutcome {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Fetch all entities at once and wait until every request has either
/// produced events or failed. Events arrive in completion order.
pub async fn gather_events(
    source: Arc<dyn EventSource>,
    entities: &[EntityRef],
    window: DayWindow,
) -> FetchOutcome {
    let mut tasks = JoinSet::new();
    for (index, entity) in entities.iter().cloned().enumerate() {
        let source = Arc::clone(&source);
        tasks.spawn(async move {
            let result = source.fetch_events(entity.id(), window).await;
            (index, result)
        });
    }

    let mut settled = vec![false; entities.len()];
    let mut outcome = FetchOutcome::default();

    while let Some(joined) = tasks.join_next().await {
        let (index, result) = match joined {
            Ok(done) => done,
            Err(err) => {
                log::error!("Calendar fetch task did not complete: {err}");
                continue;
            }
        };
        settled[index] = true;

        let entity = &entities[index];
        match result {
            Ok(events) => {
                log::debug!("Fetched {} events from {}", events.len(), entity.id());
                outcome.events.extend(events);
            }
            Err(err) => {
                log::warn!("Failed to fetch calendar {}: {:#}", entity.display_name(), err);
                outcome.failures.push(SourceFailure {
                    name: entity.display_name().to_string(),
                    error: format!("{err:#}"),
                });
            }
        }
    }

    for (entity, _) in entities
        .iter()
        .zip(settled)
        .filter(|(_, settled)| !settled)
    {
        outcome.failures.push(SourceFailure {
            name: entity.display_name().to_string(),
            error: "calendar fetch task aborted".to_string(),
        });
    }

    outcome
}
