// SPDX-FileCopyrightText: 2026 Daybook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Daybook API Layer
//!
//! High-level API coordinating storage, the fact table, and the three
//! remote feeds behind one entry point.
//!
//! # Example
//!
//! ```ignore
//! use daybook_core::api::{Daybook, DaybookConfig};
//!
//! let mut db = Daybook::new(DaybookConfig::default())?;
//!
//! db.add_event_handler(|event| {
//!     println!("Event: {:?}", event);
//! });
//!
//! // Local part renders immediately; feeds land independently.
//! let home = db.refresh_home().await?;
//! println!("{} days to go", home.days_remaining);
//! ```
//!
//! # Module Structure
//!
//! - [`error`] - Unified error type for the API layer
//! - [`config`] - Configuration types
//! - [`events`] - Event system for callbacks
//! - [`daybook`] - Main Daybook orchestrator

mod config;
mod daybook;
mod error;
mod events;

pub use config::DaybookConfig;
pub use daybook::Daybook;
pub use error::{DaybookError, DaybookResult};
pub use events::{CallbackHandler, DaybookEvent, EventDispatcher, EventHandler};
