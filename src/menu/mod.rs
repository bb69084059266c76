mod widgets;
use self::widgets::{Instructions, Logo};
use crate::app::Screen;
use crate::command::Command;
use crate::config::Rules;
use crate::consts;
use crate::game::Game;
use crate::options::{Adjustable, OptKey, OptValue, Options};
use crate::util::{center_rect, get_display_area, EnumExt, Globals};
use crossterm::event::{read, Event};
use enum_map::{Enum, EnumMap};
use ratatui::{
    buffer::Buffer,
    layout::{Flex, Layout, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{
        block::{Block, Padding},
        Widget,
    },
    Frame,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct MainMenu {
    selection: Selection,
    options: OptionsMenu,
    rules: Rules,
}

impl MainMenu {
    pub(crate) fn new(globals: Globals) -> Self {
        MainMenu {
            selection: Selection::default(),
            options: OptionsMenu::new(globals.options),
            rules: globals.rules,
        }
    }

    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    pub(crate) fn process_input(&mut self) -> std::io::Result<Option<Screen>> {
        Ok(self.handle_event(read()?))
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        match (
            self.selection,
            Command::from_key_event(event.as_key_press_event()?)?,
        ) {
            (_, Command::Quit) => return Some(Screen::Quit),
            (_, Command::Home) => self.select(Selection::PlayButton, None),
            (_, Command::End) => self.select(Selection::QuitButton, None),
            (Selection::PlayButton, Command::Enter) | (_, Command::P) => {
                return Some(Screen::Game(self.play()))
            }
            (Selection::PlayButton, Command::Prev) => self.select(Selection::QuitButton, None),
            (Selection::PlayButton, Command::Down | Command::Next) => {
                self.select(Selection::Options, Some(true));
            }
            (Selection::Options, Command::Up | Command::Prev) => {
                if let Some(sel) = self.options.move_up() {
                    self.select(sel, None);
                }
            }
            (Selection::Options, Command::Down | Command::Next) => {
                if let Some(sel) = self.options.move_down() {
                    self.select(sel, None);
                }
            }
            (Selection::Options, Command::Left) => self.options.move_left(),
            (Selection::Options, Command::Right) => self.options.move_right(),
            (Selection::Options, Command::Space | Command::Enter) => self.options.toggle(),
            (Selection::QuitButton, Command::Enter) | (_, Command::Q) => {
                return Some(Screen::Quit);
            }
            (Selection::QuitButton, Command::Next) => self.select(Selection::PlayButton, None),
            (Selection::QuitButton, Command::Up | Command::Prev) => {
                self.select(Selection::Options, Some(false));
            }
            _ => (),
        }
        None
    }

    fn globals(&self) -> Globals {
        Globals {
            options: self.options.to_options(),
            rules: self.rules,
        }
    }

    fn play(&self) -> Game {
        let globals = self.globals();
        log::debug!("Starting game with {:?}", globals.options);
        Game::new(globals)
    }

    fn select(&mut self, selection: Selection, first_option: Option<bool>) {
        self.selection = selection;
        self.options.selection = if selection == Selection::Options {
            first_option.map(|first| if first { OptKey::min() } else { OptKey::max() })
        } else {
            None
        };
    }
}

impl Widget for &MainMenu {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [logo_area, instructions_area, play_area, options_area, quit_area] =
            Layout::vertical([
                Logo::HEIGHT,
                Instructions::HEIGHT,
                1,
                OptionsMenu::HEIGHT,
                1,
            ])
            .flex(Flex::Start)
            .spacing(1)
            .areas(display);

        Logo.render(
            center_rect(logo_area, Size::new(Logo::WIDTH, Logo::HEIGHT)),
            buf,
        );
        Instructions.render(
            center_rect(
                instructions_area,
                Size::new(Instructions::WIDTH, Instructions::HEIGHT),
            ),
            buf,
        );
        button("Play", "p", self.selection == Selection::PlayButton).render(play_area, buf);
        (&self.options).render(
            center_rect(
                options_area,
                Size::new(OptionsMenu::WIDTH, OptionsMenu::HEIGHT),
            ),
            buf,
        );
        button("Quit", "q", self.selection == Selection::QuitButton).render(quit_area, buf);
    }
}

/// Render a button like `[Play (p)]`, underlined when selected
fn button(label: &'static str, key: &'static str, selected: bool) -> Line<'static> {
    let style = if selected {
        consts::MENU_SELECTION_STYLE
    } else {
        Style::new()
    };
    Line::from_iter([
        Span::styled("[", style),
        Span::styled(label, style),
        Span::styled(" (", style),
        Span::styled(key, consts::KEY_STYLE.patch(style)),
        Span::styled(")]", style),
    ])
    .centered()
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
enum Selection {
    #[default]
    PlayButton,
    Options,
    QuitButton,
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct OptionsMenu {
    /// If the currently-selected main menu item is an element of this menu,
    /// then `selection` is `Some(key)`, where `key` is the key of the selected
    /// item within the `OptionsMenu`.
    selection: Option<OptKey>,
    settings: EnumMap<OptKey, OptValue>,
}

impl OptionsMenu {
    #[allow(clippy::cast_possible_truncation)]
    const HEIGHT: u16 = (OptKey::LENGTH as u16) + 2 /* for border */;
    const HORIZONTAL_PADDING: u16 = 1; // padding on each side
    const POINTER_WIDTH: u16 = 2;
    const LABEL_VALUE_GUTTER: u16 = 2;
    const WIDTH: u16 = 2 /* for border */ + 2 * Self::HORIZONTAL_PADDING + Self::POINTER_WIDTH + OptKey::DISPLAY_WIDTH + Self::LABEL_VALUE_GUTTER + OptValue::DISPLAY_WIDTH;

    fn new(options: Options) -> Self {
        let settings = EnumMap::from_iter(OptKey::iter().map(|key| (key, options.get(key))));
        OptionsMenu {
            selection: None,
            settings,
        }
    }

    fn to_options(&self) -> Options {
        let mut opts = Options::default();
        for key in OptKey::iter() {
            opts.set(key, self.settings[key]);
        }
        opts
    }

    fn move_up(&mut self) -> Option<Selection> {
        self.selection = self.selection?.prev();
        self.selection.is_none().then_some(Selection::PlayButton)
    }

    fn move_down(&mut self) -> Option<Selection> {
        self.selection = self.selection?.next();
        self.selection.is_none().then_some(Selection::QuitButton)
    }

    fn move_left(&mut self) {
        if let Some(sel) = self.selection {
            self.settings[sel].decrease();
        }
    }

    fn move_right(&mut self) {
        if let Some(sel) = self.selection {
            self.settings[sel].increase();
        }
    }

    fn toggle(&mut self) {
        if let Some(sel) = self.selection {
            self.settings[sel].toggle();
        }
    }
}

impl Widget for &OptionsMenu {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(" Options: ")
            .padding(Padding::horizontal(OptionsMenu::HORIZONTAL_PADDING));
        let menu_area = block.inner(area);
        block.render(area, buf);
        for ((key, value), row) in OptKey::iter()
            .map(|key| (key, self.settings[key]))
            .zip(menu_area.rows())
        {
            let selected = Some(key) == self.selection;
            let style = if selected {
                consts::MENU_SELECTION_STYLE
            } else {
                Style::new()
            };
            let s = format!(
                "{pointer:pwidth$}{key:lwidth$}{space:gutter$}{value}",
                pointer = if selected { "»" } else { "" },
                pwidth = usize::from(OptionsMenu::POINTER_WIDTH),
                lwidth = usize::from(OptKey::DISPLAY_WIDTH),
                space = "",
                gutter = usize::from(OptionsMenu::LABEL_VALUE_GUTTER),
            );
            Span::styled(s, style).render(row, buf);
        }
    }
}
