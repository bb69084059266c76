use crate::command::Command;
use crate::consts;
use crate::util::EnumExt;
use crossterm::event::Event;
use enum_map::Enum;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{
        block::{Block, Padding},
        Clear, Widget,
    },
};

/// A pop-up menu shown while the game is paused
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Paused {
    /// The currently-selected item in the pause menu
    selection: PauseOpt,
}

impl Paused {
    /// The height that should be used for the `Rect` passed to
    /// `Paused::render()`
    pub(super) const HEIGHT: u16 = 6;

    /// The width that should be used for the `Rect` passed to
    /// `Paused::render()`
    pub(super) const WIDTH: u16 = 19;

    pub(super) fn new() -> Paused {
        Paused {
            selection: PauseOpt::min(),
        }
    }

    /// Handle an input event.  Returns `Some` if the user made a choice.
    pub(super) fn handle_event(&mut self, event: Event) -> Option<PauseOpt> {
        let cmd = Command::from_key_event(event.as_key_press_event()?)?;
        if let Some(opt) = PauseOpt::iter().find(|opt| opt.shortcut() == cmd) {
            return Some(opt);
        }
        self.selection = match cmd {
            Command::Quit => return Some(PauseOpt::Quit),
            Command::Enter => return Some(self.selection),
            Command::Up => self.selection.prev().unwrap_or(self.selection),
            Command::Down => self.selection.next().unwrap_or(self.selection),
            Command::Next => self.selection.next().unwrap_or_else(PauseOpt::min),
            Command::Prev => self.selection.prev().unwrap_or_else(PauseOpt::max),
            Command::Home => PauseOpt::min(),
            Command::End => PauseOpt::max(),
            _ => self.selection,
        };
        None
    }
}

/// The choices in the pause menu
#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
pub(super) enum PauseOpt {
    /// Unpause the game
    Resume,

    /// Start a new game with the same options
    Restart,

    /// Return to the main menu
    MainMenu,

    /// Quit the application
    Quit,
}

impl PauseOpt {
    fn label(self) -> &'static str {
        match self {
            PauseOpt::Resume => "Resume",
            PauseOpt::Restart => "Restart",
            PauseOpt::MainMenu => "Main Menu",
            PauseOpt::Quit => "Quit",
        }
    }

    fn key_name(self) -> &'static str {
        match self {
            PauseOpt::Resume => "Esc",
            PauseOpt::Restart => "r",
            PauseOpt::MainMenu => "m",
            PauseOpt::Quit => "q",
        }
    }

    fn shortcut(self) -> Command {
        match self {
            PauseOpt::Resume => Command::Esc,
            PauseOpt::Restart => Command::R,
            PauseOpt::MainMenu => Command::M,
            PauseOpt::Quit => Command::Q,
        }
    }

    /// Render the option as a `Line` for display in the pause menu, e.g.,
    /// `» Restart (r)`
    fn to_line(self, selected: bool) -> Line<'static> {
        let line = Line::from_iter([
            Span::raw(if selected { "» " } else { "  " }),
            Span::raw(self.label()),
            Span::raw(" ("),
            Span::styled(self.key_name(), consts::KEY_STYLE),
            Span::raw(")"),
        ]);
        if selected {
            line.style(consts::MENU_SELECTION_STYLE)
        } else {
            line
        }
    }
}

impl Widget for Paused {
    /*
     * ┌──── PAUSED ─────┐
     * │ » Resume (Esc)  │
     * │   Restart (r)   │
     * │   Main Menu (m) │
     * │   Quit (q)      │
     * └─────────────────┘
     */

    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(" PAUSED ")
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1))
            .style(Style::reset());
        let inner = block.inner(area);
        Clear.render(area, buf);
        block.render(area, buf);
        for (opt, row) in PauseOpt::iter().zip(inner.rows()) {
            opt.to_line(self.selection == opt).render(row, buf);
        }
    }
}
