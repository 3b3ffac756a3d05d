//! The counter component.
//!
//! A [`Counter`] owns one integer, shows it as `Count: <n>` above an
//! `Increment` button, and adds one to it each time the button is activated.
//!
//! # Example
//!
//! ```rust
//! use bubbletea::{KeyMsg, KeyType, Message};
//! use counter_widget::{Counter, CounterProps, Styles};
//!
//! let mut counter = Counter::new(CounterProps::new().with_initial_count(5)).with_styles(Styles::plain());
//! assert!(counter.view().starts_with("Count: 5"));
//!
//! counter.update(Message::new(KeyMsg::from_type(KeyType::Enter)));
//! assert!(counter.view().starts_with("Count: 6"));
//! ```

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use bubbles::key::matches;
use bubbletea::{Cmd, KeyMsg, Message, Model, MouseAction, MouseButton, MouseMsg};

use crate::keymap::KeyMap;
use crate::node::{Action, Node, Rect};
use crate::props::CounterProps;
use crate::style::{Styles, materialize};

/// Label of the increment control.
pub const INCREMENT_LABEL: &str = "Increment";

/// Heading level of the count label.
const HEADING_LEVEL: u8 = 2;

/// Global ID counter for counter instances.
static NEXT_ID: AtomicU64 = AtomicU64::new(1);

fn next_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Activates the increment control of the counter with the given ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncrementMsg {
    /// The counter ID.
    pub id: u64,
}

impl Action {
    /// Converts the action into a message addressed to counter `id`.
    #[must_use]
    pub fn into_message(self, id: u64) -> Message {
        match self {
            Self::Increment => Message::new(IncrementMsg { id }),
        }
    }
}

/// Counter model.
///
/// The count is private: it is only observable through [`Counter::render`]
/// and [`Counter::view`].
pub struct Counter {
    id: u64,
    count: i64,
    focus: bool,
    key_map: KeyMap,
    styles: Styles,
}

impl fmt::Debug for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Counter")
            .field("id", &self.id)
            .field("focus", &self.focus)
            .finish_non_exhaustive()
    }
}

impl Default for Counter {
    fn default() -> Self {
        Self::new(CounterProps::default())
    }
}

impl Counter {
    /// Creates a focused counter seeded from `props`.
    #[must_use]
    pub fn new(props: CounterProps) -> Self {
        let id = next_id();
        let count = props.starting_count();
        tracing::trace!(id, count, "counter created");
        Self {
            id,
            count,
            focus: true,
            key_map: KeyMap::default(),
            styles: Styles::default(),
        }
    }

    /// Sets the styles used by [`Counter::view`].
    #[must_use]
    pub fn with_styles(mut self, styles: Styles) -> Self {
        self.styles = styles;
        self
    }

    /// Sets the key bindings.
    #[must_use]
    pub fn with_key_map(mut self, key_map: KeyMap) -> Self {
        self.key_map = key_map;
        self
    }

    /// Returns the counter's unique ID.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the key bindings.
    #[must_use]
    pub fn key_map(&self) -> &KeyMap {
        &self.key_map
    }

    /// Returns whether keyboard activation is enabled.
    #[must_use]
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// Gives the counter keyboard focus.
    pub fn focus(&mut self) {
        self.focus = true;
    }

    /// Removes keyboard focus. Mouse clicks still activate the button.
    pub fn blur(&mut self) {
        self.focus = false;
    }

    /// Creates a command that activates this counter's increment button.
    #[must_use]
    pub fn increment(&self) -> Option<Cmd> {
        let id = self.id;
        Some(Cmd::new(move || Action::Increment.into_message(id)))
    }

    /// Initializes the counter. No startup command is needed.
    #[must_use]
    pub fn init(&self) -> Option<Cmd> {
        None
    }

    /// Applies one message.
    ///
    /// Each matching activation adds exactly one to the count; everything
    /// else is ignored.
    pub fn update(&mut self, msg: Message) -> Option<Cmd> {
        if let Some(inc) = msg.downcast_ref::<IncrementMsg>() {
            if inc.id == self.id {
                self.activate(Action::Increment);
            }
            return None;
        }

        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            if self.focus && matches(key, &[&self.key_map.increment]) {
                self.activate(Action::Increment);
            }
            return None;
        }

        if let Some(mouse) = msg.downcast_ref::<MouseMsg>() {
            if mouse.button != MouseButton::Left || mouse.action != MouseAction::Press {
                return None;
            }
            if self.button_area().contains(mouse.x, mouse.y) {
                self.focus = true;
                self.activate(Action::Increment);
            }
        }

        None
    }

    fn activate(&mut self, action: Action) {
        match action {
            Action::Increment => {
                self.count = self.count.wrapping_add(1);
                tracing::debug!(id = self.id, count = self.count, "counter incremented");
            }
        }
    }

    /// Describes the current UI structure.
    #[must_use]
    pub fn render(&self) -> Node {
        Node::Container(vec![
            Node::Heading {
                level: HEADING_LEVEL,
                text: format!("Count: {}", self.count),
            },
            Node::Button {
                label: INCREMENT_LABEL.to_string(),
                action: Action::Increment,
                focused: self.focus,
            },
        ])
    }

    /// Renders the counter as terminal text.
    #[must_use]
    pub fn view(&self) -> String {
        materialize(&self.render(), &self.styles).text
    }

    /// Returns where the increment button sits in [`Counter::view`].
    #[must_use]
    pub fn button_area(&self) -> Rect {
        materialize(&self.render(), &self.styles)
            .area(Action::Increment)
            .unwrap_or_default()
    }
}

/// Implement the Model trait for standalone bubbletea usage.
impl Model for Counter {
    fn init(&self) -> Option<Cmd> {
        Counter::init(self)
    }

    fn update(&mut self, msg: Message) -> Option<Cmd> {
        Counter::update(self, msg)
    }

    fn view(&self) -> String {
        Counter::view(self)
    }
}
