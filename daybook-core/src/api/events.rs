//! Event System
//!
//! Callbacks for Daybook events. A home refresh reports each feed slot as
//! it lands, so a shell can paint partial results without waiting for the
//! slowest feed.

use std::sync::Arc;

/// Events emitted by Daybook.
#[derive(Debug, Clone)]
pub enum DaybookEvent {
    /// Today's almanac record arrived.
    AlmanacLoaded,

    /// The almanac fetch failed.
    AlmanacFailed {
        /// Error description.
        error: String,
    },

    /// The weather snapshot arrived.
    WeatherLoaded,

    /// The weather fetch failed.
    WeatherFailed {
        /// Error description.
        error: String,
    },

    /// The lottery draw arrived.
    LotteryLoaded,

    /// The lottery fetch failed.
    LotteryFailed {
        /// Error description.
        error: String,
    },

    /// All three feed slots have settled (each with a value or a failure).
    HomeSettled,

    /// The fact table was refreshed from the daily feed.
    FactsRefreshed {
        /// Number of records in the new table.
        records: usize,
    },
}

/// Event handler trait.
///
/// Implement this trait to receive Daybook events.
pub trait EventHandler: Send + Sync {
    /// Called when an event occurs.
    fn on_event(&self, event: DaybookEvent);
}

/// Simple callback-based event handler.
///
/// Wraps a closure for easy event handling.
pub struct CallbackHandler<F>
where
    F: Fn(DaybookEvent) + Send + Sync,
{
    callback: F,
}

impl<F> CallbackHandler<F>
where
    F: Fn(DaybookEvent) + Send + Sync,
{
    /// Creates a new callback handler.
    pub fn new(callback: F) -> Self {
        CallbackHandler { callback }
    }
}

impl<F> EventHandler for CallbackHandler<F>
where
    F: Fn(DaybookEvent) + Send + Sync,
{
    fn on_event(&self, event: DaybookEvent) {
        (self.callback)(event);
    }
}

/// Event dispatcher for managing multiple handlers.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn EventHandler>>,
}

impl EventDispatcher {
    /// Creates a new event dispatcher.
    pub fn new() -> Self {
        EventDispatcher {
            handlers: Vec::new(),
        }
    }

    /// Adds an event handler.
    pub fn add_handler(&mut self, handler: Arc<dyn EventHandler>) {
        self.handlers.push(handler);
    }

    /// Removes all handlers.
    pub fn clear_handlers(&mut self) {
        self.handlers.clear();
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Dispatches an event to all handlers.
    pub fn dispatch(&self, event: DaybookEvent) {
        for handler in &self.handlers {
            handler.on_event(event.clone());
        }
    }
}
