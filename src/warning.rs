use crate::command::Command;
use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Rect, Size},
    text::{Line, Text},
    widgets::{
        block::{Block, Padding},
        Clear, Widget,
    },
};
use std::borrow::Cow;

/// A pop-up describing a non-fatal error, such as a configuration file that
/// could not be loaded
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Warning {
    lines: Vec<String>,
}

impl Warning {
    const MAX_LINES: usize = 16;
    const TEXT_WIDTH: u16 = 48;
    const WIDTH: u16 = Self::TEXT_WIDTH + 4;

    pub(crate) fn handle_command(&self, cmd: Command) -> Option<WarningOutcome> {
        match cmd {
            Command::Enter => Some(WarningOutcome::Dismissed),
            Command::Quit => Some(WarningOutcome::Quit),
            _ => None,
        }
    }

    fn wrap_options(indent: &str) -> textwrap::Options<'_> {
        textwrap::Options::new(usize::from(Warning::TEXT_WIDTH))
            .break_words(true)
            .initial_indent(indent)
            .subsequent_indent(indent)
    }

    fn from_error_messages(msgs: Vec<String>) -> Self {
        let mut msgs = msgs.into_iter();
        let Some(head) = msgs.next() else {
            return Warning {
                lines: vec![String::from("Something went wrong.")],
            };
        };
        let mut lines = textwrap::wrap(&head, Warning::wrap_options(""))
            .into_iter()
            .map(Cow::into_owned)
            .collect::<Vec<_>>();
        let causes = msgs.collect::<Vec<_>>();
        match causes.as_slice() {
            [] => (),
            [cause] => {
                lines.push(String::new());
                lines.push(String::from("Caused by:"));
                lines.extend(
                    textwrap::wrap(cause, Warning::wrap_options("    "))
                        .into_iter()
                        .map(Cow::into_owned),
                );
            }
            _ => {
                lines.push(String::new());
                lines.push(String::from("Caused by:"));
                for (i, m) in causes.iter().enumerate() {
                    let init_indent = format!("{i:>5}: ");
                    let opts = Warning::wrap_options("       ").initial_indent(&init_indent);
                    lines.extend(textwrap::wrap(m, opts).into_iter().map(Cow::into_owned));
                }
            }
        }
        let mut warning = Warning { lines };
        warning.truncate();
        warning
    }

    /// Add the text of another warning below this one's
    pub(crate) fn append(&mut self, other: Warning) {
        self.lines.push(String::new());
        self.lines.extend(other.lines);
        self.truncate();
    }

    fn truncate(&mut self) {
        if self.lines.len() > Warning::MAX_LINES {
            self.lines.truncate(Warning::MAX_LINES - 1);
            self.lines.push(String::from("…"));
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum WarningOutcome {
    Dismissed,
    Quit,
}

impl From<anyhow::Error> for Warning {
    fn from(e: anyhow::Error) -> Warning {
        Warning::from_error_messages(e.chain().map(ToString::to_string).collect())
    }
}

impl Widget for &Warning {
    // `area` is here the area of the entire display in which the program is
    // drawing, not the area for just the widget proper.
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = u16::try_from(self.lines.len())
            .unwrap_or(u16::MAX)
            .saturating_add(4);
        let block_area = center_rect(
            area,
            Size {
                width: Warning::WIDTH,
                height,
            },
        );
        let block = Block::bordered()
            .title(" WARNING ")
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1));
        let [text_area, ok_area] = Layout::vertical([Constraint::Fill(1), Constraint::Length(1)])
            .flex(Flex::Start)
            .spacing(1)
            .areas(block.inner(block_area));
        Clear.render(block_area, buf);
        block.render(block_area, buf);
        Text::from_iter(self.lines.iter().map(String::as_str)).render(text_area, buf);
        Line::from("[OK]").centered().render(ok_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use pretty_assertions::assert_eq;

    fn render(warning: &Warning) -> Buffer {
        let area = Rect::new(0, 0, 80, 24);
        let mut buffer = Buffer::empty(area);
        warning.render(area, &mut buffer);
        buffer
    }

    #[test]
    fn dismiss_or_quit() {
        let warning = Warning::from_error_messages(vec![String::from("Oops")]);
        assert_eq!(warning.handle_command(Command::Up), None);
        assert_eq!(warning.handle_command(Command::Q), None);
        assert_eq!(
            warning.handle_command(Command::Enter),
            Some(WarningOutcome::Dismissed)
        );
        assert_eq!(
            warning.handle_command(Command::Quit),
            Some(WarningOutcome::Quit)
        );
    }

    #[test]
    fn from_error_chain() {
        let err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied");
        let warning = Warning::from(
            Err::<(), _>(err)
                .context("failed to read config file")
                .context("Failed to load configuration")
                .unwrap_err(),
        );
        assert_eq!(
            warning.lines,
            [
                "Failed to load configuration",
                "",
                "Caused by:",
                "    0: failed to read config file",
                "    1: permission denied",
            ]
        );
    }

    #[test]
    fn append_second_warning() {
        let mut warning = Warning::from_error_messages(vec![
            String::from("Failed to load configuration"),
            String::from("invalid grid size"),
        ]);
        warning.append(Warning::from_error_messages(vec![
            String::from("Failed to set up logging"),
            String::from("permission denied"),
        ]));
        assert_eq!(
            warning.lines,
            [
                "Failed to load configuration",
                "",
                "Caused by:",
                "    invalid grid size",
                "",
                "Failed to set up logging",
                "",
                "Caused by:",
                "    permission denied",
            ]
        );
    }

    #[test]
    fn append_keeps_line_limit() {
        let mut msgs = vec![String::from("Failed to load configuration")];
        msgs.extend((0..12).map(|i| format!("cause {i}")));
        let mut warning = Warning::from_error_messages(msgs);
        assert_eq!(warning.lines.len(), 15);
        warning.append(Warning::from_error_messages(vec![String::from(
            "Failed to set up logging",
        )]));
        assert_eq!(warning.lines.len(), Warning::MAX_LINES);
        assert_eq!(warning.lines.last().map(String::as_str), Some("…"));
    }

    #[test]
    fn render_no_cause() {
        let warning = Warning::from_error_messages(vec![String::from("Failed to set up logging")]);
        let expected = Buffer::with_lines([
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "              ┌──────────────────── WARNING ─────────────────────┐              ",
            "              │ Failed to set up logging                         │              ",
            "              │                                                  │              ",
            "              │                       [OK]                       │              ",
            "              └──────────────────────────────────────────────────┘              ",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
        ]);
        assert_eq!(render(&warning), expected);
    }

    #[test]
    fn render_one_cause() {
        let warning = Warning::from_error_messages(vec![
            String::from("Failed to load configuration"),
            String::from("permission denied"),
        ]);
        let expected = Buffer::with_lines([
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "              ┌──────────────────── WARNING ─────────────────────┐              ",
            "              │ Failed to load configuration                     │              ",
            "              │                                                  │              ",
            "              │ Caused by:                                       │              ",
            "              │     permission denied                            │              ",
            "              │                                                  │              ",
            "              │                       [OK]                       │              ",
            "              └──────────────────────────────────────────────────┘              ",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
        ]);
        assert_eq!(render(&warning), expected);
    }

    #[test]
    fn render_two_causes() {
        let warning = Warning::from_error_messages(vec![
            String::from("Failed to load configuration"),
            String::from("failed to parse config file"),
            String::from("invalid grid size"),
        ]);
        let expected = Buffer::with_lines([
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "              ┌──────────────────── WARNING ─────────────────────┐              ",
            "              │ Failed to load configuration                     │              ",
            "              │                                                  │              ",
            "              │ Caused by:                                       │              ",
            "              │     0: failed to parse config file               │              ",
            "              │     1: invalid grid size                         │              ",
            "              │                                                  │              ",
            "              │                       [OK]                       │              ",
            "              └──────────────────────────────────────────────────┘              ",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
        ]);
        assert_eq!(render(&warning), expected);
    }

    #[test]
    fn render_wrapped() {
        let warning = Warning::from_error_messages(vec![
            String::from("Could not open the log file named in the configuration, so logging has been turned off for this session"),
            String::from("the directory that was supposed to contain the log file does not exist on this system"),
        ]);
        let expected = Buffer::with_lines([
            "",
            "",
            "",
            "",
            "",
            "",
            "              ┌──────────────────── WARNING ─────────────────────┐              ",
            "              │ Could not open the log file named in the         │              ",
            "              │ configuration, so logging has been turned off    │              ",
            "              │ for this session                                 │              ",
            "              │                                                  │              ",
            "              │ Caused by:                                       │              ",
            "              │     the directory that was supposed to contain   │              ",
            "              │     the log file does not exist on this system   │              ",
            "              │                                                  │              ",
            "              │                       [OK]                       │              ",
            "              └──────────────────────────────────────────────────┘              ",
            "",
            "",
            "",
            "",
            "",
            "",
            "",
        ]);
        assert_eq!(render(&warning), expected);
    }

    #[test]
    fn render_truncated() {
        let mut msgs = vec![String::from("Failed to load configuration")];
        msgs.extend(
            [
                "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
                "eleven", "twelve", "thirteen", "fourteen",
            ]
            .map(String::from),
        );
        let warning = Warning::from_error_messages(msgs);
        let expected = Buffer::with_lines([
            "",
            "",
            "              ┌──────────────────── WARNING ─────────────────────┐              ",
            "              │ Failed to load configuration                     │              ",
            "              │                                                  │              ",
            "              │ Caused by:                                       │              ",
            "              │     0: one                                       │              ",
            "              │     1: two                                       │              ",
            "              │     2: three                                     │              ",
            "              │     3: four                                      │              ",
            "              │     4: five                                      │              ",
            "              │     5: six                                       │              ",
            "              │     6: seven                                     │              ",
            "              │     7: eight                                     │              ",
            "              │     8: nine                                      │              ",
            "              │     9: ten                                       │              ",
            "              │    10: eleven                                    │              ",
            "              │    11: twelve                                    │              ",
            "              │ …                                                │              ",
            "              │                                                  │              ",
            "              │                       [OK]                       │              ",
            "              └──────────────────────────────────────────────────┘              ",
            "",
            "",
        ]);
        assert_eq!(render(&warning), expected);
    }
}
