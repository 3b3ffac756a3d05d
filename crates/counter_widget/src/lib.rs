#![forbid(unsafe_code)]
// Allow pedantic lints for early-stage API ergonomics.
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::must_use_candidate)]

//! # Counter Widget
//!
//! An embeddable counter for Bubbletea applications: a `Count: <n>` heading
//! above an `Increment` button.
//!
//! - **props** - Construction options (`initialCount`), read once
//! - **counter** - The [`Counter`] model: state, update and view
//! - **node** - Abstract render tree returned by [`Counter::render`]
//! - **style** - Terminal materialization of the render tree
//! - **keymap** - Keyboard bindings for the increment button
//!
//! The count can only be observed through what the widget renders. Every
//! activation (Enter or Space while focused, a left click on the button, or an
//! [`IncrementMsg`] addressed to the instance) adds exactly one, and the host
//! re-renders after each `update`.
//!
//! ## Example
//!
//! ```rust
//! use bubbletea::simulator::ProgramSimulator;
//! use counter_widget::{Counter, CounterProps, Styles};
//!
//! let counter = Counter::new(CounterProps::new().with_initial_count(5)).with_styles(Styles::plain());
//! let id = counter.id();
//!
//! let mut sim = ProgramSimulator::new(counter);
//! sim.init();
//! sim.send(counter_widget::Action::Increment.into_message(id));
//! sim.run_until_empty();
//!
//! assert_eq!(sim.views()[0], "Count: 5\n\n> [ Increment ]");
//! assert_eq!(sim.views()[1], "Count: 6\n\n> [ Increment ]");
//! ```

pub mod counter;
pub mod keymap;
pub mod node;
pub mod props;
pub mod style;

pub use counter::{Counter, INCREMENT_LABEL, IncrementMsg};
pub use keymap::KeyMap;
pub use node::{Action, Node, Rect};
pub use props::CounterProps;
pub use style::Styles;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::counter::{Counter, IncrementMsg};
    pub use crate::keymap::KeyMap;
    pub use crate::node::{Action, Node, Rect};
    pub use crate::props::CounterProps;
    pub use crate::style::Styles;
}
