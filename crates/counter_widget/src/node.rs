//! Abstract render output.
//!
//! [`Counter::render`](crate::Counter::render) describes what the widget shows
//! as a small tree of [`Node`]s. Turning that tree into terminal text is a
//! separate step (see [`Styles`](crate::Styles)), so hosts and tests can
//! inspect the structure without parsing styled output.

/// An action a control triggers when activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Add one to the count.
    Increment,
}

/// A node in the widget's UI structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Groups children top to bottom.
    Container(Vec<Node>),
    /// A heading-level line of text.
    Heading {
        /// Heading level, 1 being the most prominent.
        level: u8,
        /// Text content.
        text: String,
    },
    /// An activatable control.
    Button {
        /// Visible label.
        label: String,
        /// Action bound to the control.
        action: Action,
        /// Whether keyboard activation currently reaches this control.
        focused: bool,
    },
}

impl Node {
    /// Returns the children of a container, or an empty slice for leaves.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        match self {
            Self::Container(children) => children,
            _ => &[],
        }
    }

    /// Returns the text of the first heading in depth-first order.
    #[must_use]
    pub fn heading_text(&self) -> Option<&str> {
        match self {
            Self::Heading { text, .. } => Some(text),
            Self::Container(children) => children.iter().find_map(Self::heading_text),
            Self::Button { .. } => None,
        }
    }

    /// Returns the first button bound to `action`.
    #[must_use]
    pub fn button(&self, action: Action) -> Option<&Node> {
        match self {
            Self::Button { action: a, .. } if *a == action => Some(self),
            Self::Container(children) => children.iter().find_map(|c| c.button(action)),
            _ => None,
        }
    }
}

/// A rectangle of terminal cells, relative to the top-left of a view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    /// Leftmost column.
    pub x: u16,
    /// Topmost row.
    pub y: u16,
    /// Width in cells.
    pub width: u16,
    /// Height in rows.
    pub height: u16,
}

impl Rect {
    /// Creates a rectangle.
    #[must_use]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns whether the cell at `(x, y)` lies inside the rectangle.
    #[must_use]
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && y >= self.y
            && (x as u32) < self.x as u32 + self.width as u32
            && (y as u32) < self.y as u32 + self.height as u32
    }

    /// Returns the rectangle moved down by `rows`.
    #[must_use]
    pub const fn offset_y(self, rows: u16) -> Self {
        Self {
            y: self.y.saturating_add(rows),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        Node::Container(vec![
            Node::Heading {
                level: 2,
                text: "Count: 3".to_string(),
            },
            Node::Button {
                label: "Increment".to_string(),
                action: Action::Increment,
                focused: true,
            },
        ])
    }

    #[test]
    fn test_heading_text_finds_first_heading() {
        assert_eq!(sample().heading_text(), Some("Count: 3"));
        assert_eq!(Node::Container(vec![]).heading_text(), None);
    }

    #[test]
    fn test_button_lookup() {
        let tree = sample();
        match tree.button(Action::Increment) {
            Some(Node::Button { label, .. }) => assert_eq!(label, "Increment"),
            other => panic!("expected button, got {other:?}"),
        }
    }

    #[test]
    fn test_children() {
        assert_eq!(sample().children().len(), 2);
        assert!(sample().children()[0].children().is_empty());
    }

    #[test]
    fn test_rect_contains() {
        let rect = Rect::new(2, 3, 4, 2);
        assert!(rect.contains(2, 3));
        assert!(rect.contains(5, 4));
        assert!(!rect.contains(6, 4));
        assert!(!rect.contains(5, 5));
        assert!(!rect.contains(1, 3));
        assert!(!Rect::default().contains(0, 0));
    }

    #[test]
    fn test_rect_contains_at_edge_of_range() {
        let rect = Rect::new(u16::MAX - 1, 0, 10, 1);
        assert!(rect.contains(u16::MAX, 0));
    }

    #[test]
    fn test_rect_offset_y() {
        assert_eq!(Rect::new(1, 1, 3, 3).offset_y(2), Rect::new(1, 3, 3, 3));
        assert_eq!(Rect::new(0, u16::MAX, 1, 1).offset_y(5).y, u16::MAX);
    }
}
