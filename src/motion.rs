//! Scroll and cursor animation state.
//!
//! All of this is synchronous math stepped from the render loop; no timers,
//! no async machinery. The rendering layer reads the resulting values and
//! writes them into inline styles.

use crate::constants::{
    CURSOR_SIZE_DEFAULT, CURSOR_SIZE_PROJECT, CURSOR_SPRING_DAMPING, CURSOR_SPRING_STIFFNESS,
    HERO_FADE_END, HERO_MIN_SCALE, MAX_SPRING_DT,
};

/// Appearance of the cursor-follow dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorVariant {
    /// Small dot trailing the pointer
    #[default]
    Default,
    /// Enlarged dot while hovering a project card
    Project,
}

impl CursorVariant {
    /// Dot diameter in CSS pixels.
    pub fn size(&self) -> f32 {
        match self {
            CursorVariant::Default => CURSOR_SIZE_DEFAULT,
            CursorVariant::Project => CURSOR_SIZE_PROJECT,
        }
    }
}

/// Spring-follow state for the cursor dot.
///
/// Damped spring integrated with semi-implicit Euler; the stiffness and
/// damping match the original page's spring transition.
#[derive(Debug, Clone, Copy)]
pub struct CursorSpring {
    pub x: f32,
    pub y: f32,
    vx: f32,
    vy: f32,
    target_x: f32,
    target_y: f32,
    pub variant: CursorVariant,
}

impl CursorSpring {
    pub fn new() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            vx: 0.0,
            vy: 0.0,
            target_x: 0.0,
            target_y: 0.0,
            variant: CursorVariant::Default,
        }
    }

    /// Point the spring at a new pointer position.
    pub fn set_target(&mut self, x: f32, y: f32) {
        self.target_x = x;
        self.target_y = y;
    }

    /// Advance the spring by `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        let dt = dt.clamp(0.0, MAX_SPRING_DT);
        if dt == 0.0 {
            return;
        }
        self.vx += (CURSOR_SPRING_STIFFNESS * (self.target_x - self.x)
            - CURSOR_SPRING_DAMPING * self.vx)
            * dt;
        self.vy += (CURSOR_SPRING_STIFFNESS * (self.target_y - self.y)
            - CURSOR_SPRING_DAMPING * self.vy)
            * dt;
        self.x += self.vx * dt;
        self.y += self.vy * dt;
    }

    /// Whether the dot has effectively come to rest on its target.
    pub fn is_settled(&self) -> bool {
        (self.target_x - self.x).abs() < 0.5
            && (self.target_y - self.y).abs() < 0.5
            && self.vx.abs() < 0.5
            && self.vy.abs() < 0.5
    }

    /// Top-left render position of the dot (the dot is centered on the
    /// spring position).
    pub fn render_origin(&self) -> (f32, f32) {
        let half = self.variant.size() / 2.0;
        (self.x - half, self.y - half)
    }
}

impl Default for CursorSpring {
    fn default() -> Self {
        Self::new()
    }
}

/// Hero opacity and scale derived from scroll progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroTransform {
    pub opacity: f32,
    pub scale: f32,
}

/// Map overall scroll progress to the hero fade-out.
///
/// Progress 0 is the top of the page; by [`HERO_FADE_END`] the hero content
/// is fully transparent and scaled down to [`HERO_MIN_SCALE`].
pub fn hero_transform(progress: f32) -> HeroTransform {
    let t = (progress / HERO_FADE_END).clamp(0.0, 1.0);
    HeroTransform {
        opacity: 1.0 - t,
        scale: 1.0 - t * (1.0 - HERO_MIN_SCALE),
    }
}

/// Overall scroll progress in [0, 1].
///
/// A page that fits entirely in the viewport reports 0.
pub fn scroll_progress(scroll_y: f32, viewport_height: f32, content_height: f32) -> f32 {
    let scrollable = content_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spring_converges_to_target() {
        let mut spring = CursorSpring::new();
        spring.set_target(320.0, 180.0);

        for _ in 0..300 {
            spring.step(1.0 / 60.0);
        }

        assert!(spring.is_settled());
        assert!((spring.x - 320.0).abs() < 1.0);
        assert!((spring.y - 180.0).abs() < 1.0);
    }

    #[test]
    fn test_spring_is_stable_at_rest() {
        let mut spring = CursorSpring::new();
        spring.set_target(0.0, 0.0);
        spring.step(1.0 / 60.0);
        assert_eq!((spring.x, spring.y), (0.0, 0.0));
    }

    #[test]
    fn test_spring_clamps_long_frames() {
        let mut spring = CursorSpring::new();
        spring.set_target(100.0, 0.0);
        // A multi-second frame must not overshoot into instability.
        for _ in 0..200 {
            spring.step(5.0);
        }
        assert!(spring.x.is_finite());
        assert!(spring.x.abs() < 1000.0);
    }

    #[test]
    fn test_render_origin_centers_dot() {
        let mut spring = CursorSpring::new();
        spring.x = 100.0;
        spring.y = 60.0;
        assert_eq!(spring.render_origin(), (84.0, 44.0));

        spring.variant = CursorVariant::Project;
        assert_eq!(spring.render_origin(), (60.0, 20.0));
    }

    #[test]
    fn test_hero_transform_endpoints() {
        assert_eq!(hero_transform(0.0), HeroTransform { opacity: 1.0, scale: 1.0 });
        let end = hero_transform(HERO_FADE_END);
        assert!(end.opacity.abs() < f32::EPSILON);
        assert!((end.scale - HERO_MIN_SCALE).abs() < 1e-6);
        // Clamped past the end.
        assert_eq!(hero_transform(0.5), end);
        assert_eq!(hero_transform(-0.2), hero_transform(0.0));
    }

    #[test]
    fn test_hero_transform_midpoint() {
        let mid = hero_transform(HERO_FADE_END / 2.0);
        assert!((mid.opacity - 0.5).abs() < 1e-6);
        assert!((mid.scale - 0.95).abs() < 1e-6);
    }

    #[test]
    fn test_scroll_progress() {
        assert_eq!(scroll_progress(0.0, 800.0, 4000.0), 0.0);
        assert_eq!(scroll_progress(3200.0, 800.0, 4000.0), 1.0);
        assert_eq!(scroll_progress(1600.0, 800.0, 4000.0), 0.5);
        // Content shorter than the viewport never reports progress.
        assert_eq!(scroll_progress(50.0, 800.0, 600.0), 0.0);
        // Overscroll clamps.
        assert_eq!(scroll_progress(9000.0, 800.0, 4000.0), 1.0);
    }
}
