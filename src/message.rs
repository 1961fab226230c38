//! Application message types.
//!
//! All browser events reaching the controller are represented as messages in
//! the Elm architecture style; the update loop is the only place state
//! changes.

/// Messages that can be sent to update application state.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// The page scrolled to a new vertical offset
    Scrolled { y: f32 },
    /// Window or content size changed
    ViewportResized {
        width: f32,
        height: f32,
        content_height: f32,
    },
    /// Pointer moved (viewport coordinates)
    MouseMoved { x: f32, y: f32 },
    /// Pointer entered a project card
    ProjectHoverStarted,
    /// Pointer left a project card
    ProjectHoverEnded,
    /// Theme toggle button pressed
    ToggleTheme,
    /// Animation frame elapsed
    Tick { dt: f32 },
}
