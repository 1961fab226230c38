//! folio_dom - a small declarative layer over the browser DOM
//!
//! This crate provides a builder API for describing an element tree, rendering
//! it to an HTML string (usable natively, e.g. in tests), and mounting it into
//! the live DOM on WASM with message-emitting event hooks.

mod error;
mod node;

pub use error::DomError;
pub use node::{
    Node, EventKind, el, text, raw_svg, a, button, div, footer, h1, h2, h3, header, li, main_el,
    nav, p, section, span, ul,
};

#[cfg(target_arch = "wasm32")]
mod mount;

#[cfg(target_arch = "wasm32")]
pub use mount::{Dispatcher, EventListener, Mount, document, mount, window};
