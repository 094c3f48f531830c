//! Async scan session
//!
//! ## Overview
//!
//! A [`ScanSession`] puts one [`ScanGate`] in front of an async
//! [`ScanProvider`]. Each request gets its own outcome channel:
//!
//! ```text
//! request_scan() ──► lock gate ──► admit ──► unlock
//!                                   │
//!                     Refused ──────┤──────── Proceed
//!                 (1 outcome, close)│            │
//!                                   │      send Scanning
//!                                   │      spawn ─► trigger_scan ─► resolve ─► sink
//!                                   │                                 │
//!                                   └──────── receiver ◄──────────────┘
//! ```
//!
//! ## Locking
//!
//! The gate sits behind a `std::sync::Mutex`. The lock covers the admission
//! decision only; it is released before anything is awaited, so two
//! concurrent requests are strictly ordered and cannot both use the last
//! slot of a window.
//!
//! ## Failure handling
//!
//! - A configured timeout turns a hung platform scan into
//!   [`SCAN_TIMEOUT_MESSAGE`]. The attempt stays counted.
//! - Sink errors are logged at `warn` and never change the outcome.
//! - A dropped receiver does not cancel the scan or refund the attempt.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use serde::Serialize;
use tokio::sync::mpsc;
use wavemap_core::{
    Admission, ScanCompletion, ScanGate, ScanOutcome, SystemClock, TimeSource, Timestamp,
};

use crate::config::{SessionConfig, MIN_CHANNEL_CAPACITY};
use crate::provider::{NullSink, ScanProvider, ScanSink};

/// Reported when a triggered scan outlives the configured timeout
pub const SCAN_TIMEOUT_MESSAGE: &str = "Scan timed out waiting for results.";

/// Counters kept across all requests of a session
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    /// Requests admitted to the radio
    pub attempts: u64,
    /// Requests refused by cooldown or throttle
    pub refusals: u64,
    /// Scans that returned fresh results
    pub successes: u64,
    /// Scans answered from the platform cache
    pub cached_successes: u64,
    /// Requests that ended in an error outcome
    pub errors: u64,
    /// Message of the most recent error outcome
    pub last_error: Option<&'static str>,
}

impl SessionStats {
    fn record(&mut self, outcome: &ScanOutcome) {
        match outcome {
            ScanOutcome::Scanning => self.attempts += 1,
            ScanOutcome::WaitingForCooldown { .. } | ScanOutcome::Throttled { .. } => {
                self.refusals += 1
            }
            ScanOutcome::Success { is_cached: false, .. } => self.successes += 1,
            ScanOutcome::Success { is_cached: true, .. } => self.cached_successes += 1,
            ScanOutcome::Error { message } => {
                self.errors += 1;
                self.last_error = Some(*message);
            }
        }
    }
}

/// How long the caller should wait before retrying after `outcome`
///
/// `None` for outcomes where waiting does not help.
pub fn wait_hint(outcome: &ScanOutcome) -> Option<Duration> {
    outcome.retry_after_ms().map(Duration::from_millis)
}

/// Gated, async WiFi scanning
pub struct ScanSession<P, K = NullSink, C = SystemClock> {
    gate: Arc<Mutex<ScanGate>>,
    provider: Arc<P>,
    sink: Arc<K>,
    clock: C,
    config: SessionConfig,
    stats: Arc<Mutex<SessionStats>>,
}

impl<P: ScanProvider + 'static> ScanSession<P> {
    /// Session on the system clock that discards results
    pub fn new(provider: P, config: SessionConfig) -> Self {
        Self::with_parts(provider, NullSink, SystemClock, config)
    }
}

impl<P, K, C> ScanSession<P, K, C>
where
    P: ScanProvider + 'static,
    K: ScanSink + 'static,
    C: TimeSource,
{
    /// Session from explicit collaborators
    pub fn with_parts(provider: P, sink: K, clock: C, config: SessionConfig) -> Self {
        let gate = ScanGate::with_policy(config.policy);
        Self {
            gate: Arc::new(Mutex::new(gate)),
            provider: Arc::new(provider),
            sink: Arc::new(sink),
            clock,
            config,
            stats: Arc::new(Mutex::new(SessionStats::default())),
        }
    }

    /// Configuration in force
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Snapshot of the session counters
    pub fn stats(&self) -> SessionStats {
        lock(&self.stats).clone()
    }

    /// Snapshot of the gate
    pub fn gate(&self) -> ScanGate {
        lock(&self.gate).clone()
    }

    /// Time until a request would pass the rate limits
    pub fn ready_in(&self) -> Duration {
        Duration::from_millis(lock(&self.gate).ready_in(self.clock.now()))
    }

    /// Request a scan now
    ///
    /// The clock is read after the radio check, right before admission.
    pub async fn request_scan(&self) -> mpsc::Receiver<ScanOutcome> {
        self.request(None).await
    }

    /// Request a scan at an explicit timestamp
    ///
    /// Refusals are already in the channel when this returns. An admitted
    /// request has `Scanning` queued and its terminal outcome follows from
    /// a spawned task; the channel closes after it.
    pub async fn request_scan_at(&self, now: Timestamp) -> mpsc::Receiver<ScanOutcome> {
        self.request(Some(now)).await
    }

    async fn request(&self, at: Option<Timestamp>) -> mpsc::Receiver<ScanOutcome> {
        let (tx, rx) = mpsc::channel(self.config.channel_capacity.max(MIN_CHANNEL_CAPACITY));
        let enabled = self.provider.is_scanning_enabled().await;

        let now = at.unwrap_or_else(|| self.clock.now());
        let admission = lock(&self.gate).admit(now, enabled);
        match admission {
            Admission::Refused(outcome) => {
                log::debug!("scan request at {} refused: {:?}", now, outcome);
                self.deliver(&tx, outcome);
            }
            Admission::Proceed => {
                log::info!("scan request at {} admitted", now);
                self.deliver(&tx, ScanOutcome::Scanning);
                self.spawn_scan(tx);
            }
        }
        rx
    }

    /// Wait out any cooldown or throttle, then request once
    ///
    /// The wait holds no lock, so a concurrent request may take the slot
    /// first; the caller then sees that refusal.
    pub async fn scan_when_ready(&self) -> mpsc::Receiver<ScanOutcome> {
        let wait = self.ready_in();
        if !wait.is_zero() {
            log::debug!("waiting {:?} before scanning", wait);
            tokio::time::sleep(wait).await;
        }
        self.request_scan().await
    }

    fn deliver(&self, tx: &mpsc::Sender<ScanOutcome>, outcome: ScanOutcome) {
        lock(&self.stats).record(&outcome);
        // Only the first outcome goes through here, so the channel has room
        if tx.try_send(outcome).is_err() {
            log::debug!("scan outcome dropped: receiver gone");
        }
    }

    fn spawn_scan(&self, tx: mpsc::Sender<ScanOutcome>) {
        let provider = Arc::clone(&self.provider);
        let sink = Arc::clone(&self.sink);
        let stats = Arc::clone(&self.stats);
        let timeout = self.config.timeout();

        tokio::spawn(async move {
            let outcome = run_scan(provider.as_ref(), timeout).await;

            if let ScanOutcome::Success {
                observations,
                is_cached,
            } = &outcome
            {
                if let Err(e) = sink.record(observations, *is_cached).await {
                    log::warn!("failed to record {} observations: {}", observations.len(), e);
                }
            }

            lock(&stats).record(&outcome);
            if tx.send(outcome).await.is_err() {
                log::debug!("scan finished after receiver was dropped");
            }
        });
    }
}

async fn run_scan<P: ScanProvider + ?Sized>(provider: &P, timeout: Option<Duration>) -> ScanOutcome {
    let completion = match timeout {
        Some(limit) => match tokio::time::timeout(limit, provider.trigger_scan()).await {
            Ok(completion) => completion,
            Err(_) => {
                log::warn!("scan did not complete within {:?}", limit);
                return ScanOutcome::Error {
                    message: SCAN_TIMEOUT_MESSAGE,
                };
            }
        },
        None => provider.trigger_scan().await,
    };

    let cached = match completion {
        ScanCompletion::Fresh(_) => Vec::new(),
        ScanCompletion::Failed | ScanCompletion::StartFailed => {
            provider.cached_observations().await
        }
    };
    ScanGate::resolve(completion, move || cached)
}

/// Lock, recovering the data if a previous holder panicked
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
