//! Folio - personal portfolio page
//!
//! A client-rendered single-page portfolio site compiled to WebAssembly. The
//! page logic (section tracking, theme preference, cursor and scroll motion)
//! is plain Rust, testable on any target; the DOM layer only exists on WASM.

mod app;
mod constants;
mod message;
mod model;
mod motion;
mod storage;
mod style;
mod theme;
mod tracker;
mod ui;

pub use app::{PortfolioApp, ViewState};
pub use message::Message;
pub use model::{Profile, default_profile};
pub use storage::{MemoryStore, PreferenceStore};
pub use style::stylesheet;
pub use theme::ThemeChoice;
pub use tracker::{RegionBounds, SectionId, SectionTracker};

// WASM entry point
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;
