//! Shared test utilities for the storefront test suite.
//!
//! Provides a sample page layout modelled on the live storefront, carousel
//! constructors backed by [`ActiveSet`], and assertions over the
//! single-active-slide invariant.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let mut clock = VirtualClock::new();
//! let mut page = sample_page(3);
//! page.mount(&mut clock);
//! page.dispatch(click(ClickTarget::CarouselNext), &mut clock);
//! assert_single_active(page.carousel().unwrap(), 1);
//! ```

use std::collections::BTreeMap;
use std::time::Duration;

use crate::carousel::{Carousel, DEFAULT_AUTOPLAY};
use crate::config::StoreConfig;
use crate::page::{ClickTarget, Page, PageEvent, PageLayout};
use crate::reveal::{Extent, HeroPart, RevealKind, Revealable};
use crate::view::ActiveSet;

pub fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

pub fn click(target: ClickTarget) -> PageEvent {
    PageEvent::Click(target)
}

// =========================================================================
// Carousel fixtures
// =========================================================================

/// A carousel of `n` slides with the default auto-play period.
pub fn carousel_of(n: usize) -> Carousel<ActiveSet> {
    Carousel::new(ActiveSet::new(n), ActiveSet::new(n), DEFAULT_AUTOPLAY).unwrap()
}

/// Assert the carousel is on `index` with exactly that slide and that
/// indicator active.
pub fn assert_single_active(carousel: &Carousel<ActiveSet>, index: usize) {
    assert_eq!(carousel.current(), index, "current index");
    assert_eq!(carousel.slides().active_count(), 1, "active slides");
    assert_eq!(carousel.indicators().active_count(), 1, "active indicators");
    assert_eq!(carousel.slides().active(), Some(index), "active slide");
    assert_eq!(carousel.indicators().active(), Some(index), "active indicator");
}

// =========================================================================
// Page fixtures
// =========================================================================

fn dataset(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn revealable(id: &str, kind: RevealKind, top: f64, height: f64) -> Revealable {
    Revealable {
        id: id.to_string(),
        kind,
        extent: Extent { top, height },
    }
}

/// Storefront layout: 800px viewport, 80px navbar.
///
/// ```text
/// hero      0..700     section
/// about     700
/// products  1500..2400 section, cards "card-elephant" and "card-owl" at 1550
/// contact   2600
/// ```
///
/// Product cards: `elephant` is complete (`cly-001`), `broken` has no price.
pub fn sample_layout(slides: usize) -> PageLayout {
    PageLayout {
        slides,
        indicators: None,
        viewport_height: 800.0,
        navbar_height: 80.0,
        sections: [
            ("hero", 0.0),
            ("about", 700.0),
            ("products", 1500.0),
            ("contact", 2600.0),
        ]
        .into_iter()
        .map(|(id, top)| (id.to_string(), top))
        .collect(),
        revealables: vec![
            revealable("hero", RevealKind::Section, 0.0, 700.0),
            revealable("products", RevealKind::Section, 1500.0, 900.0),
            revealable("card-elephant", RevealKind::Card, 1550.0, 300.0),
            revealable("card-owl", RevealKind::Card, 1550.0, 300.0),
        ],
        hero: HeroPart::ALL.to_vec(),
        products: [
            (
                "elephant".to_string(),
                dataset(&[
                    ("product-id", "cly-001"),
                    ("product-name", "Elephant Statue"),
                    ("product-price", "₹499"),
                    ("product-image", "images/elephant.jpg"),
                ]),
            ),
            (
                "broken".to_string(),
                dataset(&[("product-id", "cly-404"), ("product-name", "Nameless")]),
            ),
        ]
        .into_iter()
        .collect(),
    }
}

/// A page over [`sample_layout`] with stock config. Not yet mounted.
pub fn sample_page(slides: usize) -> Page<ActiveSet> {
    Page::new(
        &StoreConfig::default(),
        sample_layout(slides),
        ActiveSet::new(slides),
        ActiveSet::new(slides),
    )
}
