//! Scroll-triggered reveal animations and the hero load sequence.
//!
//! Sections and cards start tagged `fade-in-up` and gain `visible` the first
//! time they intersect the viewport. Visibility is one-way: scrolling an
//! element back out does not hide it again.
//!
//! Intersection follows the observer the page was built with: the viewport's
//! bottom edge is pulled up by a margin, and an element counts once at least
//! `threshold` of its height falls inside that shrunk viewport.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::time::Duration;

/// Vertical extent of an element, in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub top: f64,
    pub height: f64,
}

/// Intersection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealRule {
    /// Fraction of the element that must be visible, 0.0..=1.0.
    pub threshold: f64,
    /// Pixels the viewport's bottom edge is pulled up by.
    pub bottom_margin: f64,
}

impl Default for RevealRule {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin: 100.0,
        }
    }
}

impl RevealRule {
    /// Visible fraction of `element` for a viewport at `scroll_y`.
    pub fn visible_ratio(&self, element: Extent, scroll_y: f64, viewport_height: f64) -> f64 {
        let view_top = scroll_y;
        let view_bottom = scroll_y + (viewport_height - self.bottom_margin).max(0.0);
        // An element with no height is fully visible as soon as its edge is
        // inside the viewport, boundaries included.
        if element.height <= 0.0 {
            let inside = element.top >= view_top && element.top <= view_bottom;
            return if inside { 1.0 } else { 0.0 };
        }
        let overlap =
            (element.top + element.height).min(view_bottom) - element.top.max(view_top);
        if overlap <= 0.0 {
            return 0.0;
        }
        (overlap / element.height).min(1.0)
    }

    pub fn intersects(&self, element: Extent, scroll_y: f64, viewport_height: f64) -> bool {
        let ratio = self.visible_ratio(element, scroll_y, viewport_height);
        ratio > 0.0 && ratio >= self.threshold
    }
}

/// What kind of element is being observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealKind {
    Section,
    /// Feature, product, step and info cards. Cards stagger their
    /// transitions by document order.
    Card,
}

/// One observed element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Revealable {
    pub id: String,
    pub kind: RevealKind,
    #[serde(flatten)]
    pub extent: Extent,
}

/// Tracks which observed elements have been revealed.
#[derive(Debug, Clone)]
pub struct RevealTracker {
    rule: RevealRule,
    stagger: Duration,
    elements: Vec<Revealable>,
    revealed: BTreeSet<usize>,
}

impl RevealTracker {
    pub fn new(rule: RevealRule, stagger: Duration, elements: Vec<Revealable>) -> Self {
        Self {
            rule,
            stagger,
            elements,
            revealed: BTreeSet::new(),
        }
    }

    /// Transition delay for the element with `id`: cards are delayed by
    /// their position among cards times the stagger step; sections have
    /// none.
    pub fn transition_delay(&self, id: &str) -> Option<Duration> {
        let element = self.elements.iter().find(|e| e.id == id)?;
        if element.kind == RevealKind::Section {
            return Some(Duration::ZERO);
        }
        let position = self
            .elements
            .iter()
            .filter(|e| e.kind == RevealKind::Card)
            .position(|e| e.id == id)?;
        Some(self.stagger * position as u32)
    }

    /// Reveal everything newly intersecting at `scroll_y`. Returns the ids
    /// revealed by this call, in document order.
    pub fn observe(&mut self, scroll_y: f64, viewport_height: f64) -> Vec<String> {
        let mut newly = Vec::new();
        for (index, element) in self.elements.iter().enumerate() {
            if self.revealed.contains(&index) {
                continue;
            }
            if self.rule.intersects(element.extent, scroll_y, viewport_height) {
                self.revealed.insert(index);
                newly.push(element.id.clone());
            }
        }
        newly
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.elements
            .iter()
            .position(|e| e.id == id)
            .is_some_and(|i| self.revealed.contains(&i))
    }
}

/// Hero elements that fade in after page load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeroPart {
    Title,
    Tagline,
    CtaButtons,
}

impl HeroPart {
    pub const ALL: [HeroPart; 3] = [HeroPart::Title, HeroPart::Tagline, HeroPart::CtaButtons];
}

/// Delay before each present hero part fades in, from `delays` in
/// title/tagline/buttons order. Absent parts are skipped.
pub fn hero_schedule(present: &[HeroPart], delays: [Duration; 3]) -> Vec<(HeroPart, Duration)> {
    HeroPart::ALL
        .into_iter()
        .zip(delays)
        .filter(|(part, _)| present.contains(part))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: &str, top: f64) -> Revealable {
        Revealable {
            id: id.to_string(),
            kind: RevealKind::Card,
            extent: Extent { top, height: 200.0 },
        }
    }

    fn section(id: &str, top: f64, height: f64) -> Revealable {
        Revealable {
            id: id.to_string(),
            kind: RevealKind::Section,
            extent: Extent { top, height },
        }
    }

    #[test]
    fn bottom_margin_shrinks_viewport() {
        let rule = RevealRule::default();
        // Viewport 0..800, effective 0..700.
        let element = Extent {
            top: 691.0,
            height: 100.0,
        };
        assert!(!rule.intersects(element, 0.0, 800.0));
        assert!(rule.intersects(element, 5.0, 800.0));
        // Without the margin the element would already be well inside.
        let no_margin = RevealRule {
            bottom_margin: 0.0,
            ..rule
        };
        assert!(no_margin.intersects(element, 0.0, 800.0));
    }

    #[test]
    fn threshold_requires_ten_percent() {
        let rule = RevealRule::default();
        let element = Extent {
            top: 695.0,
            height: 100.0,
        };
        // 5px of 100 visible.
        assert!(!rule.intersects(element, 0.0, 800.0));
        // 15px visible.
        assert!(rule.intersects(element, 10.0, 800.0));
    }

    #[test]
    fn zero_height_element_reveals_inside_viewport() {
        let rule = RevealRule::default();
        let divider = Extent {
            top: 300.0,
            height: 0.0,
        };
        assert_eq!(rule.visible_ratio(divider, 0.0, 800.0), 1.0);
        assert!(rule.intersects(divider, 0.0, 800.0));
        // Below the margin-shrunk bottom edge at 700.
        let low = Extent {
            top: 750.0,
            height: 0.0,
        };
        assert_eq!(rule.visible_ratio(low, 0.0, 800.0), 0.0);
        assert!(rule.intersects(low, 100.0, 800.0));
    }

    #[test]
    fn reveal_is_one_way() {
        let mut tracker = RevealTracker::new(
            RevealRule::default(),
            Duration::from_millis(100),
            vec![section("about", 0.0, 500.0), card("owl", 1500.0)],
        );
        assert_eq!(tracker.observe(0.0, 800.0), vec!["about"]);
        assert_eq!(tracker.observe(1200.0, 800.0), vec!["owl"]);
        assert!(tracker.observe(0.0, 800.0).is_empty());
        assert!(tracker.is_revealed("about"));
        assert!(tracker.is_revealed("owl"));
    }

    #[test]
    fn cards_stagger_by_card_order() {
        let tracker = RevealTracker::new(
            RevealRule::default(),
            Duration::from_millis(100),
            vec![
                card("a", 0.0),
                section("s", 0.0, 10.0),
                card("b", 0.0),
                card("c", 0.0),
            ],
        );
        assert_eq!(tracker.transition_delay("a"), Some(Duration::ZERO));
        assert_eq!(tracker.transition_delay("s"), Some(Duration::ZERO));
        assert_eq!(tracker.transition_delay("c"), Some(Duration::from_millis(200)));
        assert_eq!(tracker.transition_delay("missing"), None);
    }

    #[test]
    fn hero_schedule_skips_missing_parts() {
        let delays = [100, 300, 500].map(Duration::from_millis);
        let plan = hero_schedule(&[HeroPart::Title, HeroPart::CtaButtons], delays);
        assert_eq!(
            plan,
            vec![
                (HeroPart::Title, Duration::from_millis(100)),
                (HeroPart::CtaButtons, Duration::from_millis(500)),
            ]
        );
    }
}
