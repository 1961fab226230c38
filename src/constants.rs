//! Global constants for the folio application.

/// Key under which the theme choice is persisted (localStorage on WASM).
pub const THEME_STORAGE_KEY: &str = "theme";

/// Fraction of a section that must be inside the viewport before it becomes
/// the active navigation target.
pub const SECTION_VISIBILITY_THRESHOLD: f32 = 0.5;

/// Cursor-follow dot diameter in the default variant (px).
pub const CURSOR_SIZE_DEFAULT: f32 = 32.0;

/// Cursor-follow dot diameter while hovering a project card (px).
pub const CURSOR_SIZE_PROJECT: f32 = 80.0;

/// Spring stiffness for the cursor-follow animation.
pub const CURSOR_SPRING_STIFFNESS: f32 = 500.0;

/// Spring damping for the cursor-follow animation.
pub const CURSOR_SPRING_DAMPING: f32 = 28.0;

/// Largest time step fed to the spring integrator (s). Frames longer than
/// this (tab in background, debugger paused) are clamped so the integration
/// stays stable.
pub const MAX_SPRING_DT: f32 = 1.0 / 30.0;

/// Scroll progress at which the hero section is fully faded out.
pub const HERO_FADE_END: f32 = 0.1;

/// Hero scale at full fade-out.
pub const HERO_MIN_SCALE: f32 = 0.9;

/// Entrance animation delays for the staggered hero elements, in render
/// order: badge, name, tagline, action row, scroll hint (s).
pub const HERO_STAGGER_DELAYS: [f32; 5] = [0.2, 0.4, 0.6, 0.8, 1.2];

/// Viewport size assumed before the first resize event arrives.
pub const DEFAULT_VIEWPORT: (f32, f32) = (1280.0, 800.0);
