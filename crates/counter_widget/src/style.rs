//! Terminal materialization of the render tree.

use lipgloss::{Border, Style};

use crate::node::{Action, Node, Rect};

/// Focus marker drawn before an ASCII button.
const FOCUS_MARKER: &str = "> ";
/// Blank prefix with the same width as [`FOCUS_MARKER`].
const NO_FOCUS_MARKER: &str = "  ";

/// Styles used when turning a [`Node`] tree into terminal text.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Style for heading text.
    pub heading: Style,
    /// Style for a button without focus.
    pub button: Style,
    /// Style for a focused button.
    pub focused_button: Style,
    /// Draw buttons as `[ label ]` with a `>` focus marker instead of borders.
    pub ascii: bool,
}

impl Default for Styles {
    fn default() -> Self {
        Self::styled()
    }
}

impl Styles {
    /// Bold heading and rounded, highlighted buttons.
    #[must_use]
    pub fn styled() -> Self {
        let button = Style::new()
            .border(Border::rounded())
            .border_foreground("240")
            .padding((0, 1));
        Self {
            heading: Style::new().bold(),
            focused_button: button.clone().border_foreground("212").bold(),
            button,
            ascii: false,
        }
    }

    /// Unstyled ASCII output, stable across terminals.
    #[must_use]
    pub fn plain() -> Self {
        Self {
            heading: Style::new(),
            button: Style::new(),
            focused_button: Style::new(),
            ascii: true,
        }
    }
}

/// A materialized view plus the screen areas of its controls.
#[derive(Debug, Clone, Default)]
pub(crate) struct Frame {
    pub(crate) text: String,
    pub(crate) hotspots: Vec<(Action, Rect)>,
}

impl Frame {
    pub(crate) fn area(&self, action: Action) -> Option<Rect> {
        self.hotspots
            .iter()
            .find(|(a, _)| *a == action)
            .map(|(_, rect)| *rect)
    }
}

/// Renders `node` with `styles`. Container children are separated by one
/// blank line.
pub(crate) fn materialize(node: &Node, styles: &Styles) -> Frame {
    match node {
        Node::Heading { text, .. } => Frame {
            text: styles.heading.render(text),
            hotspots: Vec::new(),
        },
        Node::Button {
            label,
            action,
            focused,
        } => {
            let text = render_button(label, *focused, styles);
            let rect = Rect::new(0, 0, cells(lipgloss::width(&text)), cells(lipgloss::height(&text)));
            Frame {
                text,
                hotspots: vec![(*action, rect)],
            }
        }
        Node::Container(children) => {
            let mut frame = Frame::default();
            let mut row: u16 = 0;
            for (i, child) in children.iter().enumerate() {
                if i > 0 {
                    frame.text.push_str("\n\n");
                    row = row.saturating_add(1);
                }
                let inner = materialize(child, styles);
                frame.hotspots.extend(
                    inner
                        .hotspots
                        .into_iter()
                        .map(|(action, rect)| (action, rect.offset_y(row))),
                );
                row = row.saturating_add(cells(lipgloss::height(&inner.text)));
                frame.text.push_str(&inner.text);
            }
            frame
        }
    }
}

fn render_button(label: &str, focused: bool, styles: &Styles) -> String {
    let style = if focused {
        &styles.focused_button
    } else {
        &styles.button
    };
    if styles.ascii {
        let marker = if focused { FOCUS_MARKER } else { NO_FOCUS_MARKER };
        format!("{marker}{}", style.render(&format!("[ {label} ]")))
    } else {
        style.render(label)
    }
}

fn cells(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree(focused: bool) -> Node {
        Node::Container(vec![
            Node::Heading {
                level: 2,
                text: "Count: 0".to_string(),
            },
            Node::Button {
                label: "Increment".to_string(),
                action: Action::Increment,
                focused,
            },
        ])
    }

    #[test]
    fn test_plain_layout() {
        let frame = materialize(&tree(true), &Styles::plain());
        assert_eq!(frame.text, "Count: 0\n\n> [ Increment ]");
        assert_eq!(frame.area(Action::Increment), Some(Rect::new(0, 2, 15, 1)));
    }

    #[test]
    fn test_plain_blurred_button_keeps_width() {
        let frame = materialize(&tree(false), &Styles::plain());
        assert_eq!(frame.text, "Count: 0\n\n  [ Increment ]");
        assert_eq!(frame.area(Action::Increment), Some(Rect::new(0, 2, 15, 1)));
    }

    #[test]
    fn test_styled_button_area_matches_text() {
        let frame = materialize(&tree(true), &Styles::styled());
        let rect = frame.area(Action::Increment).unwrap();
        let lines: Vec<&str> = frame.text.lines().collect();

        assert_eq!(rect.y, 2);
        assert!(rect.height >= 1);
        assert_eq!(lines.len(), usize::from(rect.y + rect.height));
        assert!(
            lines[usize::from(rect.y)..]
                .iter()
                .any(|line| line.contains("Increment"))
        );
    }

    #[test]
    fn test_nested_containers_offset_hotspots() {
        let nested = Node::Container(vec![
            Node::Heading {
                level: 1,
                text: "Title".to_string(),
            },
            tree(true),
        ]);
        let frame = materialize(&nested, &Styles::plain());
        assert_eq!(frame.text, "Title\n\nCount: 0\n\n> [ Increment ]");
        assert_eq!(frame.area(Action::Increment).map(|r| r.y), Some(4));
    }

    #[test]
    fn test_area_missing_action() {
        let frame = materialize(
            &Node::Heading {
                level: 2,
                text: "x".to_string(),
            },
            &Styles::plain(),
        );
        assert_eq!(frame.area(Action::Increment), None);
    }
}
