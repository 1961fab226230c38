//! Active-section tracking.
//!
//! The tracker owns a registration table of page regions, each with a bounds
//! provider callback, and maintains the single active section as the visitor
//! scrolls. It never owns render state: providers are queried on each
//! observation tick and may return `None` when the region is unmounted.

use crate::constants::SECTION_VISIBILITY_THRESHOLD;

/// Identifier of one navigation target on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Hero,
    About,
    Experience,
    Skills,
    Projects,
    Education,
    Contact,
}

impl SectionId {
    /// All sections in page order.
    pub const ALL: [SectionId; 7] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Experience,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Education,
        SectionId::Contact,
    ];

    /// The DOM id / anchor fragment of the section.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Experience => "experience",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Education => "education",
            SectionId::Contact => "contact",
        }
    }

    /// The label shown in the navigation bar.
    pub fn nav_label(&self) -> &'static str {
        match self {
            SectionId::Hero => "Home",
            SectionId::About => "About",
            SectionId::Experience => "Experience",
            SectionId::Skills => "Skills",
            SectionId::Projects => "Projects",
            SectionId::Education => "Education",
            SectionId::Contact => "Contact",
        }
    }

    /// Sections listed in the navigation bar (everything but the hero).
    pub fn nav_targets() -> impl Iterator<Item = SectionId> {
        Self::ALL.into_iter().filter(|s| *s != SectionId::Hero)
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Viewport-relative bounds of a region, in CSS pixels. `top` is negative
/// once the region's top edge has scrolled above the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionBounds {
    pub top: f32,
    pub bottom: f32,
}

impl RegionBounds {
    pub fn new(top: f32, bottom: f32) -> Self {
        Self { top, bottom }
    }

    /// Fraction of the region inside a viewport of the given height,
    /// clamped to [0, 1]. Degenerate (zero-height) regions count as not
    /// visible.
    pub fn visible_fraction(&self, viewport_height: f32) -> f32 {
        let height = self.bottom - self.top;
        if height <= 0.0 || viewport_height <= 0.0 {
            return 0.0;
        }
        let visible = self.bottom.min(viewport_height) - self.top.max(0.0);
        (visible / height).clamp(0.0, 1.0)
    }
}

/// Callback supplying a region's current bounds, or `None` when unmounted.
pub type BoundsProvider = Box<dyn Fn() -> Option<RegionBounds>>;

struct Region {
    id: SectionId,
    provider: BoundsProvider,
    /// Visible fraction at the previous observation tick, for crossing
    /// detection.
    last_fraction: f32,
}

/// Tracks which section is currently in view.
///
/// One instance per page view; consumers read [`SectionTracker::active`] to
/// drive the navigation highlight.
pub struct SectionTracker {
    regions: Vec<Region>,
    active: SectionId,
}

impl SectionTracker {
    /// Create a tracker with no regions. The active section defaults to the
    /// hero region.
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
            active: SectionId::Hero,
        }
    }

    /// Register a region. Returns `false` (and changes nothing) if the
    /// identifier is already registered.
    pub fn register(&mut self, id: SectionId, provider: BoundsProvider) -> bool {
        if self.is_registered(id) {
            log::warn!("section {} already registered, ignoring", id);
            return false;
        }
        self.regions.push(Region {
            id,
            provider,
            last_fraction: 0.0,
        });
        true
    }

    /// Remove a region. Idempotent: unknown or already-removed identifiers
    /// are a no-op.
    pub fn unregister(&mut self, id: SectionId) {
        self.regions.retain(|r| r.id != id);
    }

    /// Whether `id` is currently registered.
    pub fn is_registered(&self, id: SectionId) -> bool {
        self.regions.iter().any(|r| r.id == id)
    }

    /// The currently registered identifiers, in registration order.
    pub fn registered(&self) -> Vec<SectionId> {
        self.regions.iter().map(|r| r.id).collect()
    }

    /// The section currently considered in view.
    pub fn active(&self) -> SectionId {
        self.active
    }

    /// Run one observation tick against a viewport of the given height.
    ///
    /// A region becomes the active candidate when its visible fraction
    /// crosses the 50% threshold from below since the previous tick. When
    /// several regions cross in the same tick, the topmost one wins. With no
    /// candidate the active section keeps its last value.
    pub fn observe(&mut self, viewport_height: f32) {
        let mut candidate: Option<(SectionId, f32)> = None;

        for region in &mut self.regions {
            let bounds = (region.provider)();
            let fraction = bounds
                .map(|b| b.visible_fraction(viewport_height))
                .unwrap_or(0.0);

            let crossed = region.last_fraction < SECTION_VISIBILITY_THRESHOLD
                && fraction >= SECTION_VISIBILITY_THRESHOLD;
            region.last_fraction = fraction;

            if crossed {
                let top = bounds.map(|b| b.top).unwrap_or(f32::MAX);
                let replace = match candidate {
                    Some((_, best_top)) => top < best_top,
                    None => true,
                };
                if replace {
                    candidate = Some((region.id, top));
                }
            }
        }

        if let Some((id, _)) = candidate {
            if id != self.active {
                log::debug!("active section: {}", id);
                self.active = id;
            }
        }
    }
}

impl Default for SectionTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Provider backed by a shared cell so tests can move regions around.
    fn movable(bounds: Rc<Cell<Option<RegionBounds>>>) -> BoundsProvider {
        Box::new(move || bounds.get())
    }

    fn fixed(top: f32, bottom: f32) -> BoundsProvider {
        Box::new(move || Some(RegionBounds::new(top, bottom)))
    }

    fn hidden() -> BoundsProvider {
        Box::new(|| None)
    }

    #[test]
    fn test_defaults_to_hero() {
        let tracker = SectionTracker::new();
        assert_eq!(tracker.active(), SectionId::Hero);
        assert!(tracker.registered().is_empty());
    }

    #[test]
    fn test_register_unregister_bookkeeping() {
        let mut tracker = SectionTracker::new();
        assert!(tracker.register(SectionId::Hero, hidden()));
        assert!(tracker.register(SectionId::About, hidden()));
        assert!(tracker.register(SectionId::Skills, hidden()));
        assert_eq!(
            tracker.registered(),
            vec![SectionId::Hero, SectionId::About, SectionId::Skills]
        );

        // Duplicate registration is rejected.
        assert!(!tracker.register(SectionId::About, hidden()));
        assert_eq!(tracker.registered().len(), 3);

        tracker.unregister(SectionId::About);
        assert_eq!(tracker.registered(), vec![SectionId::Hero, SectionId::Skills]);

        // Second unregister is a no-op, not an error.
        tracker.unregister(SectionId::About);
        assert_eq!(tracker.registered(), vec![SectionId::Hero, SectionId::Skills]);

        // Never-registered id is also fine.
        tracker.unregister(SectionId::Contact);
        assert_eq!(tracker.registered().len(), 2);
    }

    #[test]
    fn test_half_visible_section_becomes_active() {
        let mut tracker = SectionTracker::new();
        tracker.register(SectionId::Hero, fixed(-900.0, -100.0));
        // 500 of 800 px inside an 800 px viewport.
        tracker.register(SectionId::About, fixed(300.0, 1100.0));
        tracker.register(SectionId::Skills, fixed(1100.0, 1900.0));

        tracker.observe(800.0);
        assert_eq!(tracker.active(), SectionId::About);
    }

    #[test]
    fn test_below_threshold_does_not_activate() {
        let mut tracker = SectionTracker::new();
        // 300 of 800 px visible: fraction 0.375.
        tracker.register(SectionId::About, fixed(500.0, 1300.0));

        tracker.observe(800.0);
        assert_eq!(tracker.active(), SectionId::Hero);
    }

    #[test]
    fn test_activation_requires_crossing_not_level() {
        let bounds = Rc::new(Cell::new(Some(RegionBounds::new(0.0, 800.0))));
        let mut tracker = SectionTracker::new();
        tracker.register(SectionId::About, movable(bounds.clone()));

        // Fully visible from the start: first tick crosses from the initial 0.
        tracker.observe(800.0);
        assert_eq!(tracker.active(), SectionId::About);

        // Staying above the threshold must not re-trigger anything once
        // another region takes over.
        tracker.register(SectionId::Skills, fixed(100.0, 900.0));
        tracker.observe(800.0);
        assert_eq!(tracker.active(), SectionId::Skills);

        tracker.observe(800.0);
        assert_eq!(tracker.active(), SectionId::Skills);
    }

    #[test]
    fn test_no_visible_region_retains_last_value() {
        let bounds = Rc::new(Cell::new(Some(RegionBounds::new(0.0, 800.0))));
        let mut tracker = SectionTracker::new();
        tracker.register(SectionId::About, movable(bounds.clone()));

        tracker.observe(800.0);
        assert_eq!(tracker.active(), SectionId::About);

        // Region scrolls far out of view; active keeps its last value.
        bounds.set(Some(RegionBounds::new(-2000.0, -1200.0)));
        tracker.observe(800.0);
        assert_eq!(tracker.active(), SectionId::About);

        // Region unmounts entirely; still no change.
        bounds.set(None);
        tracker.observe(800.0);
        assert_eq!(tracker.active(), SectionId::About);
    }

    #[test]
    fn test_simultaneous_crossing_topmost_wins() {
        let mut tracker = SectionTracker::new();
        // Registered bottom-first to prove the result is independent of
        // registration order.
        tracker.register(SectionId::Skills, fixed(400.0, 800.0));
        tracker.register(SectionId::About, fixed(0.0, 400.0));

        tracker.observe(800.0);
        assert_eq!(tracker.active(), SectionId::About);
    }

    #[test]
    fn test_unmounted_provider_counts_as_not_visible() {
        let mut tracker = SectionTracker::new();
        tracker.register(SectionId::About, hidden());
        tracker.observe(800.0);
        assert_eq!(tracker.active(), SectionId::Hero);
    }

    #[test]
    fn test_visible_fraction_math() {
        // Fully inside.
        assert_eq!(RegionBounds::new(100.0, 500.0).visible_fraction(800.0), 1.0);
        // Half scrolled off the top.
        assert_eq!(RegionBounds::new(-400.0, 400.0).visible_fraction(800.0), 0.5);
        // Entirely below the fold.
        assert_eq!(RegionBounds::new(900.0, 1700.0).visible_fraction(800.0), 0.0);
        // Degenerate region.
        assert_eq!(RegionBounds::new(100.0, 100.0).visible_fraction(800.0), 0.0);
    }
}
