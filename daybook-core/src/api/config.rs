// SPDX-FileCopyrightText: 2026 Daybook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for the Daybook API.

use std::path::PathBuf;

use crate::remote::FeedConfig;

/// Configuration for a Daybook instance.
#[derive(Debug, Clone)]
pub struct DaybookConfig {
    /// Local storage directory (database + fact cache).
    pub storage_path: PathBuf,

    /// Endpoints and credentials for the three feeds.
    pub feeds: FeedConfig,

    /// URL of the daily fact feed.
    pub facts_url: String,
}

impl Default for DaybookConfig {
    fn default() -> Self {
        DaybookConfig {
            storage_path: PathBuf::from("."),
            feeds: FeedConfig::default(),
            facts_url: "https://daybook.app/feeds/facts.json".to_string(),
        }
    }
}

impl DaybookConfig {
    /// Sets the storage directory.
    pub fn with_storage_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage_path = path.into();
        self
    }

    /// Sets the feed configuration.
    pub fn with_feeds(mut self, feeds: FeedConfig) -> Self {
        self.feeds = feeds;
        self
    }

    /// Sets the daily fact feed URL.
    pub fn with_facts_url(mut self, url: impl Into<String>) -> Self {
        self.facts_url = url.into();
        self
    }
}
