//! CLI output formatting.
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.
//!
//! # Output Format
//!
//! ## Order
//!
//! ```text
//! CLY-001 Elephant Statue (₹499)
//!     Image: images/elephant.jpg
//! https://wa.me/919996124025?text=Hello!%20I'm%20interested...
//! ```
//!
//! ## Simulate
//!
//! Slides are shown by 1-based position, zero-padded like every other
//! positional index.
//!
//! ```text
//!      0ms  mount  [slide 001]
//!     reveal hero
//!   5000ms  wait 5000ms  [slide 002]
//!     slide 002
//!   5000ms  click order_button  [slide 002]
//!     open https://wa.me/...
//! ```

use crate::order::{DeepLink, Product};
use crate::page::Effect;
use crate::reveal::HeroPart;
use crate::simulate::Transcript;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn hero_name(part: HeroPart) -> &'static str {
    match part {
        HeroPart::Title => "title",
        HeroPart::Tagline => "tagline",
        HeroPart::CtaButtons => "cta buttons",
    }
}

// ============================================================================
// Order
// ============================================================================

pub fn format_order(product: &Product, link: &DeepLink) -> Vec<String> {
    let mut lines = vec![format!("{} {} ({})", product.id, product.name, product.price)];
    if let Some(image) = &product.image {
        lines.push(format!("    Image: {}", image));
    }
    lines.push(link.url.clone());
    lines
}

pub fn print_order(product: &Product, link: &DeepLink) {
    for line in format_order(product, link) {
        println!("{}", line);
    }
}

// ============================================================================
// Simulate
// ============================================================================

/// One-line description of an effect.
pub fn format_effect(effect: &Effect) -> String {
    match effect {
        Effect::MenuOpen { open: true } => "menu opened".to_string(),
        Effect::MenuOpen { open: false } => "menu closed".to_string(),
        Effect::NavbarScrolled { scrolled: true } => "navbar compact".to_string(),
        Effect::NavbarScrolled { scrolled: false } => "navbar full".to_string(),
        Effect::StickyButton { visible: true } => "order button shown".to_string(),
        Effect::StickyButton { visible: false } => "order button hidden".to_string(),
        Effect::ScrollTo { top } => format!("scroll to {}px", top),
        Effect::OpenLink(link) => format!("open {}", link.url),
        Effect::SlideShown { index } => format!("slide {}", format_index(index + 1)),
        Effect::Revealed { id, delay_ms: 0 } => format!("reveal {}", id),
        Effect::Revealed { id, delay_ms } => format!("reveal {} (+{}ms)", id, delay_ms),
        Effect::HeroShown { part } => format!("hero {}", hero_name(*part)),
        Effect::BodyLoaded => "page loaded".to_string(),
    }
}

pub fn format_transcript(transcript: &Transcript) -> Vec<String> {
    let mut lines = Vec::new();
    for entry in &transcript.entries {
        let slide = entry
            .slide
            .map(|i| format!("  [slide {}]", format_index(i + 1)))
            .unwrap_or_default();
        lines.push(format!("{:>6}ms  {}{}", entry.at_ms, entry.label, slide));
        for effect in &entry.effects {
            lines.push(format!("    {}", format_effect(effect)));
        }
    }
    lines
}

pub fn print_transcript(transcript: &Transcript) {
    for line in format_transcript(transcript) {
        println!("{}", line);
    }
}
