//! Scripted page sessions.
//!
//! A script is a JSON file describing the page layout and a sequence of
//! steps: DOM events and waits. Replaying it against a [`Page`] on a
//! [`VirtualClock`] gives a deterministic transcript of every effect, which
//! is how the behavior is inspected from the command line.
//!
//! ```json
//! {
//!   "layout": { "slides": 3, "viewport_height": 800, "navbar_height": 80 },
//!   "steps": [
//!     { "type": "load" },
//!     { "wait_ms": 5000 },
//!     { "type": "click", "on": "carousel_next" },
//!     { "type": "click", "on": "order_button", "card": "elephant" }
//!   ]
//! }
//! ```

use crate::config::StoreConfig;
use crate::page::{Effect, Page, PageEvent, PageLayout};
use crate::schedule::VirtualClock;
use crate::view::ActiveSet;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimulateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Script parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One script step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Step {
    Wait { wait_ms: u64 },
    Event(PageEvent),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
    pub layout: PageLayout,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// What happened at one point of the session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    pub at_ms: u64,
    /// `mount`, `wait 5000ms`, or the event's type name.
    pub label: String,
    pub effects: Vec<Effect>,
    /// Active slide after the step, if the page has a carousel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slide: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Transcript {
    pub entries: Vec<Entry>,
}

pub fn load_script(path: &Path) -> Result<Script, SimulateError> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Replay `script` from a freshly mounted page.
pub fn run(config: &StoreConfig, script: Script) -> Transcript {
    let slides = ActiveSet::new(script.layout.slides);
    let indicators = ActiveSet::new(script.layout.indicator_count());
    let mut clock = VirtualClock::new();
    let mut page = Page::new(config, script.layout, slides, indicators);
    let mut transcript = Transcript::default();

    let effects = page.mount(&mut clock);
    transcript.push(&page, &clock, "mount".to_string(), effects);

    for step in script.steps {
        match step {
            Step::Wait { wait_ms } => {
                let effects = page.advance_clock(&mut clock, Duration::from_millis(wait_ms));
                transcript.push(&page, &clock, format!("wait {wait_ms}ms"), effects);
            }
            Step::Event(event) => {
                let label = event_label(&event);
                let effects = page.dispatch(event, &mut clock);
                transcript.push(&page, &clock, label, effects);
            }
        }
    }
    transcript
}

fn event_label(event: &PageEvent) -> String {
    match serde_json::to_value(event) {
        Ok(serde_json::Value::Object(map)) => {
            let kind = map.get("type").and_then(|v| v.as_str()).unwrap_or("event");
            match map.get("on").and_then(|v| v.as_str()) {
                Some(on) => format!("{kind} {on}"),
                None => kind.to_string(),
            }
        }
        _ => "event".to_string(),
    }
}

impl Transcript {
    fn push(
        &mut self,
        page: &Page<ActiveSet>,
        clock: &VirtualClock,
        label: String,
        effects: Vec<Effect>,
    ) {
        self.entries.push(Entry {
            at_ms: clock.now().as_millis() as u64,
            label,
            effects,
            slide: page.carousel().map(|c| c.current()),
        });
    }

    /// Every effect in order, flattened across entries.
    pub fn effects(&self) -> impl Iterator<Item = &Effect> {
        self.entries.iter().flat_map(|e| e.effects.iter())
    }
}
