//! State core of a civic-complaint feed: an in-memory session store,
//! an in-memory feed store and the service objects that a UI (or a
//! future HTTP backend) performs against them.
pub mod app;
pub mod config;
pub mod feed;
pub mod model;
pub mod seed;
pub mod services;
pub mod session;
pub mod telemetry;
pub mod types;
pub mod util;

pub use app::App;

pub(crate) mod internal;
