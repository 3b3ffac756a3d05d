//! Host application model.
//!
//! [`App`] mounts one [`Counter`] and owns everything the widget should not:
//! quitting, the help footer, and color selection.

use bubbles::help::Help;
use bubbles::key::{Binding, matches};
use bubbletea::{Cmd, KeyMsg, Message, Model, quit};
use counter_widget::{Counter, Styles};
use lipgloss::Style;

use crate::config::Config;

/// Top-level model for the demo.
pub struct App {
    counter: Counter,
    help: Help,
    quit: Binding,
}

impl App {
    /// Mounts a counter configured from `config`.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let use_color = config.use_color();
        let styles = if use_color {
            Styles::styled()
        } else {
            Styles::plain()
        };

        let mut help = Help::new();
        if use_color {
            help.styles.short_key = Style::new().foreground("245");
            help.styles.short_desc = Style::new().foreground("240");
            help.styles.short_separator = Style::new().foreground("238");
        }

        Self {
            counter: Counter::new(config.counter_props()).with_styles(styles),
            help,
            quit: Binding::new()
                .keys(&["q", "esc", "ctrl+c"])
                .help("q", "quit"),
        }
    }

    /// Returns the mounted counter.
    #[must_use]
    pub fn counter(&self) -> &Counter {
        &self.counter
    }

    /// Initializes the app.
    #[must_use]
    pub fn init(&self) -> Option<Cmd> {
        self.counter.init()
    }

    /// Handles quit keys and forwards everything else to the counter.
    pub fn update(&mut self, msg: Message) -> Option<Cmd> {
        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            if matches(key, &[&self.quit]) {
                tracing::info!(key = %key, "quit requested");
                return Some(quit());
            }
        }
        self.counter.update(msg)
    }

    /// Renders the counter followed by the help footer.
    #[must_use]
    pub fn view(&self) -> String {
        let footer = self
            .help
            .short_help_view(&[&self.counter.key_map().increment, &self.quit]);
        format!("{}\n\n{}\n", self.counter.view(), footer)
    }
}

impl Model for App {
    fn init(&self) -> Option<Cmd> {
        App::init(self)
    }

    fn update(&mut self, msg: Message) -> Option<Cmd> {
        App::update(self, msg)
    }

    fn view(&self) -> String {
        App::view(self)
    }
}
