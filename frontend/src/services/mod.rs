pub mod api;
pub mod auth;
pub mod calendar;
pub mod download;
pub mod format;
pub mod logging;
pub mod picker;
