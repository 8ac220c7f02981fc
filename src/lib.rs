//! Sova: a chat widget for a remote document-aware chat service.
//!
//! The widget logic (`state`, `controller`, `api`, `storage`) is plain Rust and
//! builds without a UI framework; `ui` and `views` render it with Dioxus when a
//! platform feature (`web`, `desktop` or `mobile`) is enabled.

pub mod api;
pub mod config;
pub mod controller;
pub mod markdown;
pub mod platform;
pub mod state;
pub mod storage;
pub mod theme;
pub mod types;

#[cfg(feature = "dioxus")]
pub mod ui;
#[cfg(feature = "dioxus")]
pub mod views;
