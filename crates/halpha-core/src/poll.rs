//! The poll-render loop.
//!
//! Each cycle captures the time, fetches the feed, publishes a fresh snapshot,
//! then counts down one second at a time before the next fetch. The current
//! [`DashboardState`] is published through a `watch` channel; readers only
//! ever see whole states.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::info;

use crate::client::FeedSource;
use crate::error::Result;
use crate::state::DashboardState;
use crate::view::StatusSnapshot;

const TICK: Duration = Duration::from_secs(1);

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

pub struct PollLoop {
    source: Arc<dyn FeedSource>,
    clock: Arc<dyn Clock>,
    sleeper: Arc<dyn Sleeper>,
    countdown_secs: u32,
    publisher: watch::Sender<DashboardState>,
}

impl PollLoop {
    /// Creates the loop in the loading state along with a receiver for its published states.
    pub fn new(
        source: Arc<dyn FeedSource>,
        countdown_secs: u32,
    ) -> (Self, watch::Receiver<DashboardState>) {
        let (publisher, receiver) = watch::channel(DashboardState::loading());
        let poll_loop = Self {
            source,
            clock: Arc::new(SystemClock),
            sleeper: Arc::new(TokioSleeper),
            countdown_secs,
            publisher,
        };
        (poll_loop, receiver)
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    /// Polls until a fetch fails. There is no retry; the error is the loop's only exit.
    pub async fn run(self) -> Result<()> {
        loop {
            self.run_cycle().await?;
        }
    }

    /// One Rendering phase followed by one full CountingDown phase.
    pub async fn run_cycle(&self) -> Result<()> {
        let snapshot = self.render().await?;
        self.count_down(snapshot).await;
        Ok(())
    }

    async fn render(&self) -> Result<Arc<StatusSnapshot>> {
        let fetched_at = self.clock.now();
        let previous = self.publisher.borrow().snapshot.clone();
        self.publisher.send_replace(DashboardState::rendering(previous));

        let started = Instant::now();
        let envelope = self.source.fetch().await?;
        let snapshot = Arc::new(StatusSnapshot::from_envelope(&envelope, fetched_at));

        info!(
            sites = envelope.site_info.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "feed refreshed"
        );
        Ok(snapshot)
    }

    async fn count_down(&self, snapshot: Arc<StatusSnapshot>) {
        for remaining_secs in (1..=self.countdown_secs).rev() {
            self.publisher
                .send_replace(DashboardState::counting_down(snapshot.clone(), remaining_secs));
            self.sleeper.sleep(TICK).await;
        }
    }
}
