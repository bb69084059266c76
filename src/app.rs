use crate::command::Command;
use crate::game::Game;
use crate::menu::MainMenu;
use crate::util::Globals;
use crate::warning::{Warning, WarningOutcome};
use crossterm::event::read;
use ratatui::{backend::Backend, Frame, Terminal};
use std::io;

#[derive(Clone, Debug)]
pub(crate) struct App {
    screen: Screen,

    /// A problem encountered at startup, shown on top of the current screen
    /// until dismissed
    warning: Option<Warning>,
}

impl App {
    pub(crate) fn new(globals: Globals, warning: Option<Warning>) -> App {
        App {
            screen: Screen::Main(MainMenu::new(globals)),
            warning,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting() {
            terminal.draw(|frame| self.draw(frame))?;
            self.process_input()?;
        }
        log::debug!("Quitting");
        Ok(())
    }

    fn draw(&self, frame: &mut Frame<'_>) {
        match self.screen {
            Screen::Main(ref menu) => menu.draw(frame),
            Screen::Game(ref game) => game.draw(frame),
            Screen::Quit => (),
        }
        if let Some(ref warning) = self.warning {
            frame.render_widget(warning, frame.area());
        }
    }

    fn process_input(&mut self) -> io::Result<()> {
        if let Some(ref warning) = self.warning {
            let outcome = read()?
                .as_key_press_event()
                .and_then(Command::from_key_event)
                .and_then(|cmd| warning.handle_command(cmd));
            match outcome {
                Some(WarningOutcome::Dismissed) => self.warning = None,
                Some(WarningOutcome::Quit) => self.screen = Screen::Quit,
                None => (),
            }
            return Ok(());
        }
        let next = match self.screen {
            Screen::Main(ref mut menu) => menu.process_input()?,
            Screen::Game(ref mut game) => game.process_input()?,
            Screen::Quit => None,
        };
        if let Some(screen) = next {
            self.screen = screen;
        }
        Ok(())
    }

    fn quitting(&self) -> bool {
        matches!(self.screen, Screen::Quit)
    }
}

/// The screen currently shown to the user
#[derive(Clone, Debug)]
pub(crate) enum Screen {
    Main(MainMenu),
    Game(Game),
    Quit,
}
