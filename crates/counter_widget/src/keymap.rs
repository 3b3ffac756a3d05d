//! Key bindings for the counter.

use bubbles::help;
use bubbles::key::Binding;

/// Keys that activate the increment control while the counter has focus.
#[derive(Debug, Clone)]
pub struct KeyMap {
    /// Press the increment button.
    pub increment: Binding,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self {
            increment: Binding::new()
                .keys(&["enter", " "])
                .help("enter/space", "increment"),
        }
    }
}

impl help::KeyMap for KeyMap {
    fn short_help(&self) -> Vec<Binding> {
        vec![self.increment.clone()]
    }

    fn full_help(&self) -> Vec<Vec<Binding>> {
        vec![self.short_help()]
    }
}
