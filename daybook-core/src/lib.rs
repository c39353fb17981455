//! Daybook Core Library
//!
//! Core library for a small personal home-screen app: an event countdown,
//! a rotated daily fact, and three independent remote feeds (almanac,
//! weather, lottery) merged into one render pass. Mobile shells consume
//! this crate through the `daybook-mobile` bindings.

pub mod api;
pub mod calendar;
pub mod event;
pub mod facts;
pub mod games;
pub mod logging;
pub mod remote;
pub mod resolver;
pub mod storage;

pub use api::{
    CallbackHandler, Daybook, DaybookConfig, DaybookError, DaybookEvent, DaybookResult,
    EventDispatcher, EventHandler,
};
pub use event::EventConfig;
pub use facts::{DailyFactRecord, FactError, FactStore, FactTable, RefreshError};
pub use games::{ChoiceGame, GameError, NumberDraw};
pub use remote::{
    AlmanacRecord, DailyForecast, FeedClient, FeedConfig, FetchError, FetchErrorKind,
    LotterySnapshot, PrizeTier, WeatherSnapshot,
};
pub use resolver::{DailyContentResolver, DailyContentResult, LocalOutlook};
pub use storage::{Settings, Storage, StorageError};
