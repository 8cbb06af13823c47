//! Input Collector
//!
//! Holds the five launch fields plus the "in progress" flag that gates
//! re-submission. Fields are free text apart from `unlock_days`; address
//! format and the 10-day minimum are not checked here.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::executor::LaunchExecutor;
use crate::report;
use crate::request::{LaunchOutcome, LaunchRequest, DEFAULT_UNLOCK_DAYS};

/// Shareable view of whether a launch is in flight
#[derive(Debug, Clone, Default)]
pub struct ProgressFlag(Arc<AtomicBool>);

impl ProgressFlag {
    pub fn is_set(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    fn raise(&self) -> InFlight<'_> {
        self.0.store(true, Ordering::SeqCst);
        InFlight(self)
    }
}

/// Lowers the flag when dropped, whatever the outcome
struct InFlight<'a>(&'a ProgressFlag);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        (self.0).0.store(false, Ordering::SeqCst);
    }
}

/// Form state for one token launch
#[derive(Debug)]
pub struct LaunchForm {
    pub name: String,
    pub symbol: String,
    pub supply: String,
    pub dev_wallet: String,
    pub unlock_days: u64,
    progress: ProgressFlag,
    message: Option<String>,
}

impl Default for LaunchForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            symbol: String::new(),
            supply: String::new(),
            dev_wallet: String::new(),
            unlock_days: DEFAULT_UNLOCK_DAYS,
            progress: ProgressFlag::default(),
            message: None,
        }
    }
}

/// Copies the field values only. The copy starts idle with its own flag, so
/// a launch through one form never lowers the other's flag.
impl Clone for LaunchForm {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            symbol: self.symbol.clone(),
            supply: self.supply.clone(),
            dev_wallet: self.dev_wallet.clone(),
            unlock_days: self.unlock_days,
            progress: ProgressFlag::default(),
            message: self.message.clone(),
        }
    }
}

impl LaunchForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current field values
    pub fn request(&self) -> LaunchRequest {
        LaunchRequest {
            name: self.name.clone(),
            symbol: self.symbol.clone(),
            supply: self.supply.clone(),
            dev_wallet: self.dev_wallet.clone(),
            unlock_days: self.unlock_days,
        }
    }

    pub fn is_launching(&self) -> bool {
        self.progress.is_set()
    }

    /// Handle for observers (e.g. a UI that disables the trigger)
    pub fn progress_flag(&self) -> ProgressFlag {
        self.progress.clone()
    }

    pub fn button_label(&self) -> &'static str {
        report::button_label(self.is_launching())
    }

    /// Message rendered from the last outcome, if any
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Submit the current fields through `executor`.
    ///
    /// The flag is up from the start of the call until the outcome is
    /// available, on success and on failure alike.
    pub async fn submit(&mut self, executor: &LaunchExecutor) -> LaunchOutcome {
        let request = self.request();
        let outcome = {
            let _in_flight = self.progress.raise();
            executor.launch(&request).await
        };
        self.message = Some(report::render(&outcome));
        outcome
    }
}
