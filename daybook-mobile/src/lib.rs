//! Daybook Mobile Bindings
//!
//! UniFFI bindings for Android and iOS platforms.
//! Exposes a simplified, mobile-friendly API on top of daybook-core.
//!
//! Note: the core instance sits behind a mutex because rusqlite's
//! Connection is not Sync; all calls are short-lived.

use std::sync::{Arc, Mutex};

use daybook_core::{calendar, ChoiceGame, Daybook, DaybookConfig, NumberDraw};

// === Modules ===

mod error;
mod types;

// Re-export public types
pub use error::MobileError;
pub use types::{
    MobileAlmanac, MobileDailyFact, MobileFeedConfig, MobileForecastDay, MobileHomeContent,
    MobileLottery, MobileOutlook, MobileSettings, MobileWeather,
};

uniffi::setup_scaffolding!();

/// Library version string.
#[uniffi::export]
pub fn daybook_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Initializes stderr logging. Safe to call more than once.
#[uniffi::export]
pub fn init_logging(level: String) -> Result<(), MobileError> {
    daybook_core::logging::init(&level).map_err(MobileError::Internal)
}

// === Main Interface ===

/// Main Daybook interface for mobile platforms.
#[derive(uniffi::Object)]
pub struct DaybookMobile {
    inner: Mutex<Daybook>,
    runtime: tokio::runtime::Runtime,
}

#[uniffi::export]
impl DaybookMobile {
    /// Opens (or creates) a Daybook instance under the given data directory.
    ///
    /// `feeds` carries the shell's API keys and weather location; pass
    /// `None` to run with bundled content only (feeds will report errors).
    #[uniffi::constructor]
    pub fn new(data_dir: String, feeds: Option<MobileFeedConfig>) -> Result<Arc<Self>, MobileError> {
        let mut config = DaybookConfig::default().with_storage_path(&data_dir);
        if let Some(feeds) = feeds {
            config = config.with_feeds(feeds.into_feed_config());
        }

        let inner = Daybook::new(config)?;
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .map_err(|e| MobileError::Internal(e.to_string()))?;

        Ok(Arc::new(DaybookMobile {
            inner: Mutex::new(inner),
            runtime,
        }))
    }

    // === Settings ===

    /// The persisted settings.
    pub fn settings(&self) -> Result<MobileSettings, MobileError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.settings()?.into())
    }

    /// Updates the countdown event. `date` is ISO (`YYYY-MM-DD`).
    pub fn update_event(&self, name: String, date: String) -> Result<(), MobileError> {
        let target = calendar::parse_event_date(&date)
            .ok_or_else(|| MobileError::InvalidInput(format!("unparseable date: {date}")))?;
        let inner = self.inner.lock().unwrap();
        inner.update_event(&name, target)?;
        Ok(())
    }

    /// Re-seeds the shuffle offset from today's day-of-year.
    pub fn reset_shuffle_offset(&self) -> Result<i64, MobileError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.reset_shuffle_offset()?)
    }

    // === Home screen ===

    /// The purely local part of today's content, for immediate rendering.
    pub fn today_outlook(&self) -> Result<MobileOutlook, MobileError> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.today_outlook()?.into())
    }

    /// Resolves today's full home-screen payload (blocking).
    ///
    /// Feed failures land in the per-slot error fields, never in `Err`.
    pub fn refresh_home(&self) -> Result<MobileHomeContent, MobileError> {
        let inner = self.inner.lock().unwrap();
        let result = self.runtime.block_on(inner.refresh_home())?;
        Ok(result.into())
    }

    /// Refreshes the fact table from the daily feed (blocking).
    ///
    /// Returns the number of records in the new table.
    pub fn refresh_facts(&self) -> Result<u32, MobileError> {
        let mut inner = self.inner.lock().unwrap();
        let records = self.runtime.block_on(inner.refresh_facts())?;
        Ok(records as u32)
    }
}

// === Games ===

/// Random-number picker game.
#[derive(uniffi::Object)]
pub struct MobileNumberDraw {
    inner: Mutex<NumberDraw>,
}

#[uniffi::export]
impl MobileNumberDraw {
    /// Creates a picker over `min..=max`.
    #[uniffi::constructor]
    pub fn new(min: i64, max: i64) -> Result<Arc<Self>, MobileError> {
        let inner = NumberDraw::new(min, max)?;
        Ok(Arc::new(MobileNumberDraw {
            inner: Mutex::new(inner),
        }))
    }

    /// Draws the next number; `None` once the range is exhausted.
    pub fn draw(&self) -> Option<i64> {
        self.inner.lock().unwrap().draw()
    }

    /// Recent draws, newest first (at most ten).
    pub fn recent(&self) -> Vec<i64> {
        self.inner.lock().unwrap().recent().to_vec()
    }

    /// Clears the draw history.
    pub fn reset(&self) {
        self.inner.lock().unwrap().reset();
    }

    /// Replaces the range and clears the history.
    pub fn set_range(&self, min: i64, max: i64) -> Result<(), MobileError> {
        self.inner.lock().unwrap().set_range(min, max)?;
        Ok(())
    }
}

/// Random-choice picker game.
#[derive(uniffi::Object)]
pub struct MobileChoiceGame {
    inner: Mutex<ChoiceGame>,
}

#[uniffi::export]
impl MobileChoiceGame {
    /// Creates a picker over the given items.
    #[uniffi::constructor]
    pub fn new(items: Vec<String>) -> Result<Arc<Self>, MobileError> {
        let inner = ChoiceGame::new(items)?;
        Ok(Arc::new(MobileChoiceGame {
            inner: Mutex::new(inner),
        }))
    }

    /// The truth-or-dare preset.
    #[uniffi::constructor]
    pub fn truth_or_dare() -> Arc<Self> {
        Arc::new(MobileChoiceGame {
            inner: Mutex::new(ChoiceGame::truth_or_dare()),
        })
    }

    /// Picks one item uniformly at random.
    pub fn pick(&self) -> String {
        self.inner.lock().unwrap().pick().to_string()
    }

    /// The item list.
    pub fn items(&self) -> Vec<String> {
        self.inner.lock().unwrap().items().to_vec()
    }

    /// Replaces the item list.
    pub fn set_items(&self, items: Vec<String>) -> Result<(), MobileError> {
        self.inner.lock().unwrap().set_items(items)?;
        Ok(())
    }
}
