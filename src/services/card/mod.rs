//! Card state and its mount/unmount lifecycle.
//!
//! [`DailyGrapherCard`] owns everything one card instance knows: its
//! configuration, the day it was set up for and the activities loaded for
//! that day. [`CardHandle`] drives a mounted card: it loads calendar data
//! once, then republishes a fresh [`CardFrame`] on every clock tick until it
//! is unmounted.

use std::sync::Arc;
use std::time::Duration;

use chrono::{NaiveDate, NaiveDateTime};
use tokio::sync::{oneshot, watch};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::models::activity::Activity;
use crate::models::config::{CardConfig, CardError};
use crate::models::layout::CardFrame;
use crate::services::calendar_fetch::{gather_events, EventSource, FetchOutcome, SourceFailure};
use crate::services::clock::read_clock;
use crate::services::layout::{compose, LayoutOptions};
use crate::services::normalizer::normalize_all;
use crate::utils::date::{local_now, DayWindow};

/// Cadence of current-time updates.
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(10);

/// Source of the current local wall-clock time.
pub type Clock = Arc<dyn Fn() -> NaiveDateTime + Send + Sync>;

#[derive(Debug, Clone)]
pub struct DailyGrapherCard {
    config: CardConfig,
    window: DayWindow,
    activities: Option<Vec<Activity>>,
    failures: Vec<SourceFailure>,
}

impl DailyGrapherCard {
    /// Validate the configuration and pin the displayed day.
    ///
    /// The day window is not moved forward afterwards; a new card has to be
    /// set up to show another day.
    pub fn new(config: CardConfig, today: NaiveDate) -> Result<Self, CardError> {
        config.validate()?;
        Ok(Self {
            config,
            window: DayWindow::starting(today),
            activities: None,
            failures: Vec::new(),
        })
    }

    pub fn config(&self) -> &CardConfig {
        &self.config
    }

    pub fn window(&self) -> DayWindow {
        self.window
    }

    /// Height hint for dashboard grids, in rows.
    pub fn card_size(&self) -> u32 {
        2
    }

    pub fn is_loaded(&self) -> bool {
        self.activities.is_some()
    }

    pub fn activities(&self) -> &[Activity] {
        self.activities.as_deref().unwrap_or_default()
    }

    pub fn failures(&self) -> &[SourceFailure] {
        &self.failures
    }

    pub async fn load(&mut self, source: Arc<dyn EventSource>) {
        let entities = self.config.calendar_entities();
        let outcome = gather_events(source, &entities, self.window).await;
        self.apply(outcome);
    }

    /// Replace the activity set with freshly fetched events.
    pub fn apply(&mut self, outcome: FetchOutcome) {
        let activities = normalize_all(&outcome.events);
        log::info!(
            "Loaded {} activities for {} ({} calendars failed)",
            activities.len(),
            self.window.today_param(),
            outcome.failures.len()
        );
        self.activities = Some(activities);
        self.failures = outcome.failures;
    }

    /// Render state at `now`, or `None` while calendar data is still loading.
    pub fn frame_at(&self, now: NaiveDateTime) -> Option<CardFrame> {
        let activities = self.activities.as_ref()?;
        let options = LayoutOptions {
            hide_full_day_events: self.config.hide_full_day_events,
        };

        Some(CardFrame {
            clock: read_clock(now, self.config.display_24_hour_time),
            layout: compose(activities, now, self.window.today, options),
        })
    }
}

/// A mounted card. Dropping the handle stops the ticker as well.
pub struct CardHandle {
    frames: watch::Receiver<Option<CardFrame>>,
    shutdown: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<DailyGrapherCard>>,
}

impl CardHandle {
    pub fn mount(card: DailyGrapherCard, source: Arc<dyn EventSource>) -> Self {
        Self::mount_with_clock(card, source, Arc::new(local_now))
    }

    pub fn mount_with_clock(
        card: DailyGrapherCard,
        source: Arc<dyn EventSource>,
        clock: Clock,
    ) -> Self {
        let (frame_tx, frame_rx) = watch::channel(None);
        let (shutdown_tx, shutdown_rx) = oneshot::channel();

        log::info!("Mounting card for {}", card.window().today_param());
        let task = tokio::spawn(run_card(card, source, clock, frame_tx, shutdown_rx));

        Self {
            frames: frame_rx,
            shutdown: Some(shutdown_tx),
            task: Some(task),
        }
    }

    /// Receiver notified whenever a new frame is published.
    pub fn frames(&self) -> watch::Receiver<Option<CardFrame>> {
        self.frames.clone()
    }

    pub fn latest(&self) -> Option<CardFrame> {
        self.frames.borrow().clone()
    }

    /// Stop the ticker and wait for it to wind down. Returns the card state,
    /// or `None` if the card task had already died.
    pub async fn unmount(mut self) -> Option<DailyGrapherCard> {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }

        let task = self.task.take()?;
        match task.await {
            Ok(card) => Some(card),
            Err(err) => {
                log::error!("Card task ended abnormally: {err}");
                None
            }
        }
    }
}

impl Drop for CardHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

async fn run_card(
    mut card: DailyGrapherCard,
    source: Arc<dyn EventSource>,
    clock: Clock,
    frames: watch::Sender<Option<CardFrame>>,
    mut shutdown: oneshot::Receiver<()>,
) -> DailyGrapherCard {
    let entities = card.config.calendar_entities();
    let fetch = gather_events(source, &entities, card.window);
    tokio::pin!(fetch);
    let mut fetched = false;

    let mut ticker = tokio::time::interval(REFRESH_INTERVAL);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;
            _ = &mut shutdown => break,
            outcome = &mut fetch, if !fetched => {
                fetched = true;
                card.apply(outcome);
            }
            _ = ticker.tick() => {}
        }

        frames.send_replace(card.frame_at(clock()));
    }

    if !fetched {
        log::debug!("Abandoning calendar fetch still pending at unmount");
    }
    log::info!("Card for {} unmounted", card.window.today_param());
    card
}
