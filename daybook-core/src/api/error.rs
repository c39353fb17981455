// SPDX-FileCopyrightText: 2026 Daybook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! API Error Types
//!
//! Unified error type for the Daybook API layer.

use thiserror::Error;

use crate::facts::{FactError, RefreshError};
use crate::remote::FetchError;
use crate::storage::StorageError;

/// Unified error type for Daybook operations.
#[derive(Error, Debug)]
pub enum DaybookError {
    /// Storage operation failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// Fact table construction or caching failed.
    #[error("fact error: {0}")]
    Facts(#[from] FactError),

    /// Fact feed refresh failed.
    #[error("refresh error: {0}")]
    Refresh(#[from] RefreshError),

    /// Feed client setup failed.
    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Result type for Daybook operations.
pub type DaybookResult<T> = Result<T, DaybookError>;
