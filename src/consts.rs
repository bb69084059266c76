//! Assorted constants & hard-coded configuration
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};
use std::time::Duration;

/// Draw the menus inside a rectangle of this size in the center of the
/// terminal window.
///
/// Cf. [`crate::util::get_display_area()`]
pub(crate) const DISPLAY_SIZE: Size = Size {
    width: 80,
    height: 24,
};

/// Minimum width of the game screen, wide enough for the status bar and the
/// game-over prompt
pub(crate) const GAME_MIN_WIDTH: u16 = 54;

/// Number of terminal columns used to draw a single grid cell
pub(crate) const CELL_WIDTH: u16 = 2;

/// Default width & height of the (square) playing grid
pub(crate) const GRID_SIZE: u16 = 30;

/// Smallest grid size accepted from the configuration file
pub(crate) const MIN_GRID_SIZE: u16 = 8;

/// Largest grid size accepted from the configuration file
pub(crate) const MAX_GRID_SIZE: u16 = 60;

/// Number of letters in a target word
pub(crate) const WORD_LENGTH: usize = 3;

/// Default number of letter blocks spawned at the start of a round
pub(crate) const DEFAULT_LETTERS: usize = 8;

/// The maximum number of letter blocks spawned at the start of a round
pub(crate) const MAX_LETTERS: usize = 12;

/// Points awarded for eating the next letter of the target word
pub(crate) const WORD_LETTER_POINTS: u32 = 5;

/// Points awarded for eating any other letter
pub(crate) const STRAY_LETTER_POINTS: u32 = 1;

/// Time on the clock when a game starts
pub(crate) const START_TIME: Duration = Duration::from_secs(5 * 60);

/// Time added to the clock whenever a new round starts after a word is
/// spelled
pub(crate) const ROUND_TIME: Duration = Duration::from_secs(5 * 60);

/// Bonus time per point of score awarded for spelling a word
pub(crate) const BONUS_PER_POINT: Duration = Duration::from_secs(60);

/// Name of the environment variable that can override the log filter
pub(crate) const LOG_ENV_VAR: &str = "WORDSNAKE_LOG";

/// Glyphs for the snake's head when it is moving north/up
pub(crate) const SNAKE_HEAD_NORTH_SYMBOL: &str = "vv";

/// Glyphs for the snake's head when it is moving south/down
pub(crate) const SNAKE_HEAD_SOUTH_SYMBOL: &str = "^^";

/// Glyphs for the snake's head when it is moving east/right
pub(crate) const SNAKE_HEAD_EAST_SYMBOL: &str = "<<";

/// Glyphs for the snake's head when it is moving west/left
pub(crate) const SNAKE_HEAD_WEST_SYMBOL: &str = ">>";

/// Glyphs for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: &str = "██";

/// Glyphs for the snake's head when it's collided with a wall or itself
pub(crate) const COLLISION_SYMBOL: &str = "××";

/// Style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for the letters of the target word that have already been eaten
pub(crate) const SPELLED_STYLE: Style = Style::new()
    .fg(Color::Green)
    .add_modifier(Modifier::UNDERLINED);

/// Style for the currently-selected menu item
pub(crate) const MENU_SELECTION_STYLE: Style = Style::new().add_modifier(Modifier::UNDERLINED);

/// Background colors of the tiles in the main menu logo
pub(crate) const LOGO_COLORS: [Color; 4] = [
    Color::Rgb(0xE0, 0x4F, 0x5F),
    Color::Rgb(0xF2, 0xB1, 0x34),
    Color::Rgb(0x3F, 0xA7, 0xD6),
    Color::Rgb(0x8E, 0x5C, 0xC9),
];
