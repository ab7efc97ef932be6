//! Navigation chrome: hamburger menu, navbar scroll state, sticky order
//! button, and scroll targets.
//!
//! All of these are small state holders or pure functions. They report
//! whether anything changed so the page only emits effects for real
//! transitions.

/// Mobile menu opened by the hamburger button.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Hamburger click.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Close the menu. Returns `true` if it was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }
}

/// Scroll offset beyond which the navbar switches to its compact style.
pub const DEFAULT_SCROLLED_OFFSET: f64 = 100.0;

/// Whether the navbar should carry the `scrolled` class at `scroll_y`.
pub fn navbar_scrolled(scroll_y: f64, offset: f64) -> bool {
    scroll_y > offset
}

/// Whether the sticky order button is shown. It appears once the visitor
/// has scrolled past the first viewport (the hero section).
pub fn sticky_visible(scroll_y: f64, viewport_height: f64) -> bool {
    scroll_y > viewport_height
}

/// Smooth-scroll destination for a section so that it sits just below the
/// fixed navbar.
pub fn section_scroll_target(section_top: f64, navbar_height: f64) -> f64 {
    section_top - navbar_height
}

/// Whether a key press should scroll back to the top of the page.
///
/// `h`/`H` is the shortcut, except while typing into a form field.
pub fn is_home_shortcut(key: &str, target_tag: Option<&str>) -> bool {
    let typing = target_tag.is_some_and(|tag| {
        tag.eq_ignore_ascii_case("input") || tag.eq_ignore_ascii_case("textarea")
    });
    matches!(key, "h" | "H") && !typing
}

/// Last-applied navbar and sticky button state, so repeated scroll events
/// at the same side of a threshold don't produce duplicate effects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrollChrome {
    pub navbar_scrolled: bool,
    pub sticky_visible: bool,
}
