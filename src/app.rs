//! Portfolio application controller.
//!
//! One [`PortfolioApp`] instance is created per page view and owns all
//! mutable page state: the section tracker, the theme preference, the cursor
//! spring, and the current viewport metrics. The rendering layer feeds it
//! [`Message`]s and reads back a [`ViewState`] snapshot; it never mutates
//! state directly.

use crate::constants::DEFAULT_VIEWPORT;
use crate::message::Message;
use crate::model::{Profile, default_profile};
use crate::motion::{self, CursorSpring, CursorVariant, HeroTransform};
use crate::storage::PreferenceStore;
use crate::theme::{ThemeChoice, ThemePreference};
use crate::tracker::{BoundsProvider, SectionId, SectionTracker};

/// Read-only view of the state the rendering layer needs each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    /// Section whose nav link is highlighted
    pub active_section: SectionId,
    /// Resolved theme for the page
    pub theme: ThemeChoice,
    /// Hero fade-out driven by scroll progress
    pub hero: HeroTransform,
    /// Cursor dot top-left corner and diameter
    pub cursor_origin: (f32, f32),
    pub cursor_size: f32,
    pub cursor_variant: CursorVariant,
}

/// Main application state.
pub struct PortfolioApp {
    profile: Profile,
    tracker: SectionTracker,
    theme: ThemePreference,
    cursor: CursorSpring,
    viewport: (f32, f32),
    content_height: f32,
    scroll_y: f32,
}

impl PortfolioApp {
    /// Create the controller for one page view, resolving the initial theme
    /// from the given store and OS signal.
    pub fn new(store: Box<dyn PreferenceStore>, prefers_dark: Option<bool>) -> Self {
        Self {
            profile: default_profile(),
            tracker: SectionTracker::new(),
            theme: ThemePreference::resolve(store, prefers_dark),
            cursor: CursorSpring::new(),
            viewport: DEFAULT_VIEWPORT,
            content_height: DEFAULT_VIEWPORT.1,
            scroll_y: 0.0,
        }
    }

    /// The page content.
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    #[cfg(test)]
    pub(crate) fn profile_mut(&mut self) -> &mut Profile {
        &mut self.profile
    }

    /// Register a section region with the tracker.
    pub fn register_section(&mut self, id: SectionId, provider: BoundsProvider) -> bool {
        self.tracker.register(id, provider)
    }

    /// Remove a section region. Idempotent.
    pub fn unregister_section(&mut self, id: SectionId) {
        self.tracker.unregister(id)
    }

    /// Current theme choice.
    pub fn theme(&self) -> ThemeChoice {
        self.theme.current()
    }

    /// Overall scroll progress in [0, 1].
    pub fn scroll_progress(&self) -> f32 {
        motion::scroll_progress(self.scroll_y, self.viewport.1, self.content_height)
    }

    /// Handle one message. Synchronous; completes within the event-loop turn.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::Scrolled { y } => {
                self.scroll_y = y;
                self.tracker.observe(self.viewport.1);
            }
            Message::ViewportResized {
                width,
                height,
                content_height,
            } => {
                self.viewport = (width, height);
                self.content_height = content_height;
                self.tracker.observe(self.viewport.1);
            }
            Message::MouseMoved { x, y } => {
                self.cursor.set_target(x, y);
            }
            Message::ProjectHoverStarted => {
                self.cursor.variant = CursorVariant::Project;
            }
            Message::ProjectHoverEnded => {
                self.cursor.variant = CursorVariant::Default;
            }
            Message::ToggleTheme => {
                let choice = self.theme.toggle();
                log::info!("theme toggled to {}", choice.as_str());
            }
            Message::Tick { dt } => {
                self.cursor.step(dt);
            }
        }
    }

    /// Snapshot of everything the rendering layer needs.
    pub fn snapshot(&self) -> ViewState {
        ViewState {
            active_section: self.tracker.active(),
            theme: self.theme.current(),
            hero: motion::hero_transform(self.scroll_progress()),
            cursor_origin: self.cursor.render_origin(),
            cursor_size: self.cursor.variant.size(),
            cursor_variant: self.cursor.variant,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use crate::tracker::RegionBounds;

    fn app() -> PortfolioApp {
        PortfolioApp::new(Box::new(MemoryStore::new()), None)
    }

    #[test]
    fn test_initial_snapshot() {
        let state = app().snapshot();
        assert_eq!(state.active_section, SectionId::Hero);
        assert_eq!(state.theme, ThemeChoice::Light);
        assert_eq!(state.hero.opacity, 1.0);
        assert_eq!(state.cursor_variant, CursorVariant::Default);
    }

    #[test]
    fn test_scroll_drives_tracker_and_hero() {
        let mut app = app();
        app.update(Message::ViewportResized {
            width: 1280.0,
            height: 800.0,
            content_height: 8000.0,
        });
        app.register_section(
            SectionId::About,
            Box::new(|| Some(RegionBounds::new(100.0, 900.0))),
        );

        app.update(Message::Scrolled { y: 720.0 });
        let state = app.snapshot();
        assert_eq!(state.active_section, SectionId::About);
        // 720 / 7200 = 0.1 progress: hero fully faded.
        assert!(state.hero.opacity.abs() < 1e-6);
    }

    #[test]
    fn test_theme_toggle_message() {
        let mut app = app();
        app.update(Message::ToggleTheme);
        assert_eq!(app.theme(), ThemeChoice::Dark);
        app.update(Message::ToggleTheme);
        assert_eq!(app.theme(), ThemeChoice::Light);
    }

    #[test]
    fn test_cursor_hover_messages() {
        let mut app = app();
        app.update(Message::ProjectHoverStarted);
        assert_eq!(app.snapshot().cursor_variant, CursorVariant::Project);
        assert_eq!(app.snapshot().cursor_size, 80.0);

        app.update(Message::ProjectHoverEnded);
        assert_eq!(app.snapshot().cursor_variant, CursorVariant::Default);
        assert_eq!(app.snapshot().cursor_size, 32.0);
    }

    #[test]
    fn test_cursor_follows_pointer() {
        let mut app = app();
        app.update(Message::MouseMoved { x: 400.0, y: 300.0 });
        for _ in 0..300 {
            app.update(Message::Tick { dt: 1.0 / 60.0 });
        }
        let (ox, oy) = app.snapshot().cursor_origin;
        // Dot centered on the pointer: origin offset by half the size.
        assert!((ox - 384.0).abs() < 1.0);
        assert!((oy - 284.0).abs() < 1.0);
    }
}
