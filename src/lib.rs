//! # Storefront
//!
//! Behavior engine for a handmade-goods storefront page: the hero carousel,
//! the navigation chrome, scroll-reveal animations, and WhatsApp order
//! links. The page itself is static HTML; this crate owns everything that
//! happens in response to a click, key, touch, scroll, or timer.
//!
//! # Architecture: Events In, Effects Out
//!
//! ```text
//! host (DOM)  ──PageEvent──▶  Page  ──Effect──▶  host applies
//!                              │
//!                              ├─ Carousel ──▶ ActiveView (slides, indicators)
//!                              └─ Scheduler (auto-play, hero fades)
//! ```
//!
//! Nothing here touches a document directly. Slides and indicators sit
//! behind [`view::ActiveView`], timers behind [`schedule::Scheduler`], and
//! every other change is returned as a [`page::Effect`]. The same code runs
//! under a browser host or under [`schedule::VirtualClock`] in tests and the
//! `simulate` command.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`carousel`] | Slide index, wrap-around navigation, single auto-play task |
//! | [`view`] | `ActiveView` trait and the in-memory `ActiveSet` |
//! | [`schedule`] | `Scheduler` trait, task ids, deterministic `VirtualClock` |
//! | [`swipe`] | Touch gesture classification with a strict dead zone |
//! | [`order`] | Product cards and `wa.me` deep links |
//! | [`nav`] | Hamburger menu, navbar/sticky-button thresholds, home shortcut |
//! | [`reveal`] | Intersection-based reveal and the hero load sequence |
//! | [`page`] | Event router composing all of the above |
//! | [`simulate`] | JSON script replay on a virtual clock |
//! | [`config`] | `config.toml` loading and validation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## One Owner for All State
//!
//! The slide index, the auto-play handle, the menu flag and the touch start
//! coordinate all live in one [`page::Page`] value. Handlers receive it by
//! `&mut`, so there is no hidden shared state and only one instance can
//! exist per page.
//!
//! ## Replace, Never Orphan
//!
//! Auto-play is a single repeating task. Starting it cancels whatever task
//! was running; stopping is idempotent. Ticks from a cancelled task are
//! recognised by id and dropped, so at most one timer can ever move the
//! carousel.

pub mod carousel;
pub mod config;
pub mod nav;
pub mod order;
pub mod output;
pub mod page;
pub mod reveal;
pub mod schedule;
pub mod simulate;
pub mod swipe;
pub mod view;

#[cfg(test)]
pub(crate) mod test_helpers;
