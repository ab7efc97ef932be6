//! Active-element views.
//!
//! The carousel never touches a rendering surface directly. Slides and
//! indicators are each a fixed, ordered collection where exactly one element
//! is marked active, and [`ActiveView`] is the only capability the controller
//! needs from them. A browser host implements it by toggling the `active`
//! class; [`ActiveSet`] is the in-memory implementation used by the
//! simulator and the test suite.

use serde::Serialize;

/// A fixed ordered collection with a single active element.
pub trait ActiveView {
    /// Number of elements. Fixed for the lifetime of the view.
    fn len(&self) -> usize;

    /// Mark `index` active and every other element inactive.
    ///
    /// Callers guarantee `index < self.len()`.
    fn set_active(&mut self, index: usize);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory view: one flag per element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveSet {
    flags: Vec<bool>,
}

impl ActiveSet {
    /// A collection of `len` elements, none active yet.
    pub fn new(len: usize) -> Self {
        Self {
            flags: vec![false; len],
        }
    }

    /// Index of the active element, if exactly one is active.
    pub fn active(&self) -> Option<usize> {
        let mut active = self.flags.iter().enumerate().filter(|(_, on)| **on);
        match (active.next(), active.next()) {
            (Some((i, _)), None) => Some(i),
            _ => None,
        }
    }

    /// How many elements are currently flagged active.
    pub fn active_count(&self) -> usize {
        self.flags.iter().filter(|on| **on).count()
    }

    pub fn flags(&self) -> &[bool] {
        &self.flags
    }
}

impl ActiveView for ActiveSet {
    fn len(&self) -> usize {
        self.flags.len()
    }

    fn set_active(&mut self, index: usize) {
        for (i, flag) in self.flags.iter_mut().enumerate() {
            *flag = i == index;
        }
    }
}
