mod app;
mod command;
mod config;
mod consts;
mod game;
mod logging;
mod menu;
mod options;
mod util;
mod warning;
use crate::app::App;
use crate::config::Config;
use crate::util::Globals;
use crate::warning::Warning;
use anyhow::Context;
use crossterm::event::{DisableFocusChange, EnableFocusChange};
use crossterm::execute;
use lexopt::{Arg, Parser};
use std::io::{self, ErrorKind, Write};
use std::path::PathBuf;
use std::process::ExitCode;

const USAGE: &str = "\
Usage: wordsnake [OPTIONS]

Spell words by steering a snake into letter tiles, against the clock

Options:
  -c, --config <FILE>   Read configuration from the given file
  -h, --help            Print this help message and exit
  -V, --version         Print the program version and exit
";

#[derive(Clone, Debug, Eq, PartialEq)]
enum Arguments {
    Run { config: Option<PathBuf> },
    Help,
    Version,
}

impl Arguments {
    fn from_parser(mut parser: Parser) -> Result<Arguments, lexopt::Error> {
        let mut config = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('c') | Arg::Long("config") => {
                    config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Short('h') | Arg::Long("help") => return Ok(Arguments::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Arguments::Version),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Arguments::Run { config })
    }
}

fn main() -> ExitCode {
    match Arguments::from_parser(Parser::from_env()) {
        Ok(Arguments::Run { config }) => run(config),
        Ok(Arguments::Help) => {
            print!("{USAGE}");
            ExitCode::SUCCESS
        }
        Ok(Arguments::Version) => {
            println!("wordsnake {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("wordsnake: {e}");
            eprintln!("Run `wordsnake --help` for usage");
            ExitCode::from(2)
        }
    }
}

fn run(config_path: Option<PathBuf>) -> ExitCode {
    let (config, mut warning) = match load_config(config_path) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(Warning::from(e))),
    };
    if let Err(e) = logging::init(&config.logging) {
        let e = anyhow::Error::new(e).context("Failed to set up logging");
        match warning {
            Some(ref mut w) => w.append(Warning::from(e)),
            None => warning = Some(Warning::from(e)),
        }
    }
    log::info!("Starting wordsnake {}", env!("CARGO_PKG_VERSION"));
    let globals = Globals {
        options: config.options,
        rules: config.rules,
    };
    let terminal = ratatui::init();
    let r = with_focus_reporting(&mut io::stdout(), || {
        App::new(globals, warning).run(terminal)
    });
    ratatui::restore();
    io_exit(r)
}

/// Run `f` with terminal focus reporting turned on, so that the game sees
/// `FocusLost` events and can pause itself
fn with_focus_reporting<W, F, T>(out: &mut W, f: F) -> io::Result<T>
where
    W: Write,
    F: FnOnce() -> io::Result<T>,
{
    execute!(out, EnableFocusChange)?;
    let r = f();
    let disabled = execute!(out, DisableFocusChange);
    let value = r?;
    disabled?;
    Ok(value)
}

/// Load the configuration file given on the command line, or else the one at
/// the default location, if it exists
fn load_config(path: Option<PathBuf>) -> anyhow::Result<Config> {
    let (path, allow_missing) = match path {
        Some(p) => (p, false),
        None => (
            Config::default_path().context("Failed to load configuration")?,
            true,
        ),
    };
    Config::load(&path, allow_missing)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))
}

fn io_exit(r: io::Result<()>) -> ExitCode {
    match r {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Fatal I/O error: {e}");
            eprintln!("{e}");
            ExitCode::from(2)
        }
    }
}
