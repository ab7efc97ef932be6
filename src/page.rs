//! Page event router.
//!
//! [`Page`] is the single owner of all behavior state on the storefront
//! page. The host forwards DOM events as [`PageEvent`]s together with a
//! [`Scheduler`]; the page updates its controllers and returns the
//! [`Effect`]s the host should apply. Slide changes additionally go straight
//! to the carousel's [`ActiveView`]s.
//!
//! Missing page structure never fails an event. An absent carousel, section
//! or product card turns the matching feature into a no-op with a warning,
//! the same way the live page silently skips elements it cannot find.

use crate::carousel::{Carousel, CarouselInput};
use crate::config::StoreConfig;
use crate::nav::{self, NavMenu, ScrollChrome};
use crate::order::{self, DeepLink, Product};
use crate::reveal::{self, HeroPart, RevealTracker, Revealable};
use crate::schedule::{Scheduler, TaskId, VirtualClock};
use crate::swipe::SwipeTracker;
use crate::view::ActiveView;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{debug, warn};

/// Static structure of the page, as discovered at load time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageLayout {
    /// Number of carousel slides.
    pub slides: usize,
    /// Number of carousel indicators. Defaults to the slide count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indicators: Option<usize>,
    pub viewport_height: f64,
    pub navbar_height: f64,
    /// Section id → top offset, for in-page navigation.
    pub sections: BTreeMap<String, f64>,
    /// Elements that fade in on scroll, in document order.
    pub revealables: Vec<Revealable>,
    /// Hero parts present on the page.
    pub hero: Vec<HeroPart>,
    /// Product card id → dataset (`product-id`, `product-name`, ...).
    pub products: BTreeMap<String, BTreeMap<String, String>>,
}

impl PageLayout {
    pub fn indicator_count(&self) -> usize {
        self.indicators.unwrap_or(self.slides)
    }
}

/// What a click landed on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "on", rename_all = "snake_case")]
pub enum ClickTarget {
    Hamburger,
    /// A link inside the nav menu, e.g. `#products`.
    NavLink { href: String },
    /// Somewhere else inside the open nav menu.
    Menu,
    CarouselNext,
    CarouselPrev,
    Indicator { index: usize },
    /// The order button of the product card with this id.
    OrderButton { card: String },
    /// Anything outside the menu and hamburger.
    Elsewhere,
}

impl ClickTarget {
    fn inside_nav(&self) -> bool {
        matches!(
            self,
            ClickTarget::Hamburger | ClickTarget::NavLink { .. } | ClickTarget::Menu
        )
    }
}

/// Events forwarded from the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageEvent {
    Click(ClickTarget),
    KeyDown {
        key: String,
        /// Tag name of the focused element, if any.
        #[serde(default)]
        target_tag: Option<String>,
    },
    TouchStart { x: f64 },
    TouchEnd { x: f64 },
    PointerEnter,
    PointerLeave,
    Scroll { y: f64 },
    Load,
    /// A task handed out by the scheduler fired.
    #[serde(skip)]
    TimerFired(TaskId),
}

/// Changes the host applies to the document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum Effect {
    MenuOpen { open: bool },
    NavbarScrolled { scrolled: bool },
    StickyButton { visible: bool },
    /// Smooth scroll to an absolute offset.
    ScrollTo { top: f64 },
    OpenLink(DeepLink),
    SlideShown { index: usize },
    Revealed { id: String, delay_ms: u64 },
    HeroShown { part: HeroPart },
    BodyLoaded,
}

pub struct Page<V: ActiveView> {
    layout: PageLayout,
    phone: String,
    navbar_offset: f64,
    hero_delays: [Duration; 3],
    menu: NavMenu,
    chrome: ScrollChrome,
    scroll_y: f64,
    carousel: Option<Carousel<V>>,
    swipe: SwipeTracker,
    reveal: RevealTracker,
    hero_tasks: BTreeMap<TaskId, HeroPart>,
}

impl<V: ActiveView> Page<V> {
    /// Wire up a page. A carousel whose structure is unusable is dropped.
    pub fn new(config: &StoreConfig, layout: PageLayout, slides: V, indicators: V) -> Self {
        let carousel = match Carousel::new(slides, indicators, config.carousel.autoplay_period())
        {
            Ok(carousel) => Some(carousel),
            Err(e) => {
                warn!("carousel disabled: {e}");
                None
            }
        };
        let reveal = RevealTracker::new(
            config.reveal.rule(),
            config.reveal.stagger(),
            layout.revealables.clone(),
        );
        Self {
            phone: config.order.phone_number.clone(),
            navbar_offset: config.navbar.scrolled_offset_px,
            hero_delays: config.reveal.hero_delays(),
            menu: NavMenu::default(),
            chrome: ScrollChrome::default(),
            scroll_y: 0.0,
            carousel,
            swipe: SwipeTracker::new(config.carousel.swipe_threshold_px),
            reveal,
            hero_tasks: BTreeMap::new(),
            layout,
        }
    }

    pub fn carousel(&self) -> Option<&Carousel<V>> {
        self.carousel.as_ref()
    }

    pub fn menu_open(&self) -> bool {
        self.menu.is_open()
    }

    pub fn chrome(&self) -> &ScrollChrome {
        &self.chrome
    }

    /// Start page behavior: begin auto-play and reveal whatever is already
    /// on screen.
    pub fn mount<S: Scheduler>(&mut self, scheduler: &mut S) -> Vec<Effect> {
        if let Some(carousel) = self.carousel.as_mut() {
            carousel.start_auto_play(scheduler);
        }
        self.reveal_visible()
    }

    pub fn dispatch<S: Scheduler>(&mut self, event: PageEvent, scheduler: &mut S) -> Vec<Effect> {
        match event {
            PageEvent::Click(target) => self.on_click(target, scheduler),
            PageEvent::KeyDown { key, target_tag } => {
                self.on_key(&key, target_tag.as_deref(), scheduler)
            }
            PageEvent::TouchStart { x } => {
                self.swipe.touch_start(x);
                Vec::new()
            }
            PageEvent::TouchEnd { x } => match self.swipe.touch_end(x) {
                Some(direction) => self.carousel_input(CarouselInput::Swipe(direction), scheduler),
                None => Vec::new(),
            },
            PageEvent::PointerEnter => self.carousel_input(CarouselInput::PointerEnter, scheduler),
            PageEvent::PointerLeave => self.carousel_input(CarouselInput::PointerLeave, scheduler),
            PageEvent::Scroll { y } => self.on_scroll(y),
            PageEvent::Load => self.on_load(scheduler),
            PageEvent::TimerFired(id) => self.on_timer(id),
        }
    }

    fn on_click<S: Scheduler>(&mut self, target: ClickTarget, scheduler: &mut S) -> Vec<Effect> {
        let mut effects = Vec::new();
        let outside = !target.inside_nav();
        match target {
            ClickTarget::Hamburger => {
                let open = self.menu.toggle();
                effects.push(Effect::MenuOpen { open });
            }
            ClickTarget::NavLink { href } => {
                if self.menu.close() {
                    effects.push(Effect::MenuOpen { open: false });
                }
                let id = href.trim_start_matches('#');
                match self.layout.sections.get(id) {
                    Some(top) => effects.push(Effect::ScrollTo {
                        top: nav::section_scroll_target(*top, self.layout.navbar_height),
                    }),
                    None => debug!(href, "nav link target not on page"),
                }
            }
            ClickTarget::Menu | ClickTarget::Elsewhere => {}
            ClickTarget::CarouselNext => {
                effects.extend(self.carousel_input(CarouselInput::NextButton, scheduler))
            }
            ClickTarget::CarouselPrev => {
                effects.extend(self.carousel_input(CarouselInput::PrevButton, scheduler))
            }
            ClickTarget::Indicator { index } => {
                effects.extend(self.carousel_input(CarouselInput::Indicator(index), scheduler))
            }
            ClickTarget::OrderButton { card } => {
                if let Some(link) = self.order_link(&card) {
                    effects.push(Effect::OpenLink(link));
                }
            }
        }
        if outside && self.menu.close() {
            effects.push(Effect::MenuOpen { open: false });
        }
        effects
    }

    fn order_link(&self, card: &str) -> Option<DeepLink> {
        let Some(dataset) = self.layout.products.get(card) else {
            warn!(card, "order button outside a known product card");
            return None;
        };
        match Product::from_dataset(dataset) {
            Ok(product) => Some(order::order_link(&self.phone, &product)),
            Err(e) => {
                warn!(card, "cannot place order: {e}");
                None
            }
        }
    }

    fn on_key<S: Scheduler>(
        &mut self,
        key: &str,
        target_tag: Option<&str>,
        scheduler: &mut S,
    ) -> Vec<Effect> {
        match key {
            "ArrowLeft" => self.carousel_input(CarouselInput::ArrowLeft, scheduler),
            "ArrowRight" => self.carousel_input(CarouselInput::ArrowRight, scheduler),
            _ if nav::is_home_shortcut(key, target_tag) => vec![Effect::ScrollTo { top: 0.0 }],
            _ => Vec::new(),
        }
    }

    fn carousel_input<S: Scheduler>(
        &mut self,
        input: CarouselInput,
        scheduler: &mut S,
    ) -> Vec<Effect> {
        let Some(carousel) = self.carousel.as_mut() else {
            return Vec::new();
        };
        if carousel.handle(input, scheduler) {
            vec![Effect::SlideShown {
                index: carousel.current(),
            }]
        } else {
            Vec::new()
        }
    }

    fn on_scroll(&mut self, y: f64) -> Vec<Effect> {
        self.scroll_y = y;
        let mut effects = Vec::new();

        let scrolled = nav::navbar_scrolled(y, self.navbar_offset);
        if scrolled != self.chrome.navbar_scrolled {
            self.chrome.navbar_scrolled = scrolled;
            effects.push(Effect::NavbarScrolled { scrolled });
        }
        let visible = nav::sticky_visible(y, self.layout.viewport_height);
        if visible != self.chrome.sticky_visible {
            self.chrome.sticky_visible = visible;
            effects.push(Effect::StickyButton { visible });
        }

        effects.extend(self.reveal_visible());
        effects
    }

    fn reveal_visible(&mut self) -> Vec<Effect> {
        self.reveal
            .observe(self.scroll_y, self.layout.viewport_height)
            .into_iter()
            .map(|id| {
                let delay_ms = self
                    .reveal
                    .transition_delay(&id)
                    .map_or(0, |d| d.as_millis() as u64);
                Effect::Revealed { id, delay_ms }
            })
            .collect()
    }

    fn on_load<S: Scheduler>(&mut self, scheduler: &mut S) -> Vec<Effect> {
        for (part, delay) in reveal::hero_schedule(&self.layout.hero, self.hero_delays) {
            let id = scheduler.schedule_once(delay);
            self.hero_tasks.insert(id, part);
        }
        vec![Effect::BodyLoaded]
    }

    fn on_timer(&mut self, id: TaskId) -> Vec<Effect> {
        if let Some(part) = self.hero_tasks.remove(&id) {
            return vec![Effect::HeroShown { part }];
        }
        match self.carousel.as_mut() {
            Some(carousel) => {
                if carousel.on_tick(id) {
                    vec![Effect::SlideShown {
                        index: carousel.current(),
                    }]
                } else {
                    Vec::new()
                }
            }
            None => Vec::new(),
        }
    }
}

impl<V: ActiveView> Page<V> {
    /// Advance `clock` by `by`, dispatching every timer that fires along the
    /// way in order.
    pub fn advance_clock(&mut self, clock: &mut VirtualClock, by: Duration) -> Vec<Effect> {
        let deadline = clock.now() + by;
        let mut effects = Vec::new();
        while let Some(id) = clock.pop_due(deadline) {
            effects.extend(self.dispatch(PageEvent::TimerFired(id), clock));
        }
        clock.settle(deadline);
        effects
    }
}
