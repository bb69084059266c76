mod clock;
mod direction;
mod grid;
mod letters;
mod paused;
mod snake;
mod word;
use self::clock::Clock;
use self::direction::Direction;
use self::grid::Bounds;
use self::letters::{random_color, random_letter, LetterBlock};
use self::paused::{PauseOpt, Paused};
use self::snake::Snake;
use self::word::TargetWord;
use crate::app::Screen;
use crate::command::Command;
use crate::consts;
use crate::menu::MainMenu;
use crate::util::{center_rect, Globals};
use crossterm::event::{poll, read, Event};
use rand::{seq::IteratorRandom, Rng};
use ratatui::{
    buffer::{Buffer, Cell},
    layout::{Constraint, Layout, Margin, Position, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
    Frame,
};
use std::collections::HashSet;
use std::fmt;
use std::time::{Duration, Instant};

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    globals: Globals,
    bounds: Bounds,
    snake: Snake,
    blocks: Vec<LetterBlock>,
    word: TargetWord,
    /// Points scored in the current round
    score: u32,
    /// Number of words spelled so far this game
    words_spelled: u32,
    clock: Clock,
    state: GameState,
    next_tick: Option<Instant>,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(globals: Globals) -> Self {
        Game::new_with_rng(globals, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(globals: Globals, rng: R) -> Game<R> {
        let bounds = Bounds::square(globals.rules.grid_size, globals.options.wraparound);
        let (head, direction) = bounds.snake_start();
        let mut game = Game {
            rng,
            bounds,
            snake: Snake::new(head, direction),
            blocks: Vec::new(),
            word: TargetWord::new([]),
            score: 0,
            words_spelled: 0,
            clock: Clock::new(globals.rules.start_time),
            state: GameState::Running,
            globals,
            next_tick: None,
        };
        game.start_round();
        game
    }

    pub(crate) fn process_input(&mut self) -> std::io::Result<Option<Screen>> {
        if self.running() {
            let period = self.tick_period();
            let when = *self
                .next_tick
                .get_or_insert_with(|| Instant::now() + period);
            let wait = when.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                self.advance();
                self.next_tick = None;
                Ok(None)
            } else {
                Ok(self.handle_event(read()?))
            }
        } else {
            Ok(self.handle_event(read()?))
        }
    }

    /// Reset the snake, the score, and the letters on the grid, and pick a
    /// new word from the first letters placed
    fn start_round(&mut self) {
        let (head, direction) = self.bounds.snake_start();
        self.snake = Snake::new(head, direction);
        self.score = 0;
        self.blocks.clear();
        for _ in 0..self.globals.options.letters.get() {
            let letter = random_letter(&mut self.rng);
            self.place_block(letter);
        }
        self.word = TargetWord::new(
            self.blocks
                .iter()
                .take(consts::WORD_LENGTH)
                .map(|block| block.letter),
        );
        log::info!(
            "Round {}: spell {} in {} remaining",
            self.words_spelled + 1,
            self.word,
            self.clock
        );
    }

    /// Move the game forwards by one tick
    fn advance(&mut self) {
        if !self.running() {
            return;
        }
        let Some(next) = self.snake.next_head(self.bounds) else {
            self.game_over(GameOver::HitWall);
            return;
        };
        if self.snake.occupies(next) {
            self.snake.step(next, false);
            self.game_over(GameOver::HitSelf);
            return;
        }
        let eaten = self
            .blocks
            .iter()
            .position(|block| block.position == next)
            .map(|i| self.blocks.remove(i));
        self.snake.step(next, eaten.is_some());
        if let Some(block) = eaten {
            self.eat(block);
        }
        if self.clock.tick(self.tick_period()) {
            self.game_over(GameOver::TimeUp);
        }
    }

    fn eat(&mut self, block: LetterBlock) {
        if self.word.accept(block.letter) {
            self.score += consts::WORD_LETTER_POINTS;
            log::debug!("Ate {}, next in {}", block.letter, self.word);
            if self.word.is_complete() {
                self.finish_round();
                return;
            }
        } else {
            self.score += consts::STRAY_LETTER_POINTS;
            log::debug!(
                "Ate {} while waiting for {:?}",
                block.letter,
                self.word.next()
            );
        }
        self.replenish();
    }

    /// Award bonus time for the completed word and start a new round
    fn finish_round(&mut self) {
        let bonus = self
            .globals
            .rules
            .bonus_per_point
            .saturating_mul(self.score);
        self.clock.extend(bonus);
        self.clock.extend(self.globals.rules.round_time);
        self.words_spelled += 1;
        log::info!(
            "Spelled {} for {} points; bonus time: {}s",
            self.word,
            self.score,
            bonus.as_secs()
        );
        self.start_round();
    }

    /// Make sure that every letter still needed for the word is on the grid,
    /// placing new blocks for any that have been eaten out of order
    fn replenish(&mut self) {
        let mut missing = self.word.remaining().to_vec();
        for block in &self.blocks {
            if let Some(i) = missing.iter().position(|&c| c == block.letter) {
                missing.swap_remove(i);
            }
        }
        for letter in missing {
            log::debug!("Replacing missing letter {letter}");
            self.place_block(letter);
        }
    }

    /// Place a block with the given letter and a random color on a random
    /// free cell
    fn place_block(&mut self, letter: char) {
        let occupied = self
            .snake
            .cells
            .iter()
            .copied()
            .chain(self.blocks.iter().map(|block| block.position))
            .collect::<HashSet<_>>();
        let Some(position) = self
            .bounds
            .positions()
            .filter(|p| !occupied.contains(p))
            .choose(&mut self.rng)
        else {
            log::warn!("No room left on the grid for the letter {letter}");
            return;
        };
        let color = random_color(&mut self.rng);
        self.blocks.push(LetterBlock::new(letter, position, color));
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        match self.state {
            GameState::Running => {
                if event == Event::FocusLost {
                    self.pause();
                } else {
                    match Command::from_key_event(event.as_key_press_event()?)? {
                        Command::Quit => return Some(Screen::Quit),
                        Command::Up => self.snake.turn(Direction::North),
                        Command::Left => self.snake.turn(Direction::West),
                        Command::Down => self.snake.turn(Direction::South),
                        Command::Right => self.snake.turn(Direction::East),
                        Command::Esc | Command::P => self.pause(),
                        _ => (),
                    }
                }
            }
            GameState::Paused(ref mut paused) => match paused.handle_event(event)? {
                PauseOpt::Resume => self.state = GameState::Running,
                PauseOpt::Restart => return Some(self.restart()),
                PauseOpt::MainMenu => return Some(self.main_menu()),
                PauseOpt::Quit => return Some(Screen::Quit),
            },
            GameState::Over(_) => match Command::from_key_event(event.as_key_press_event()?)? {
                Command::R => return Some(self.restart()),
                Command::M => return Some(self.main_menu()),
                Command::Quit | Command::Q => return Some(Screen::Quit),
                _ => (),
            },
        }
        None
    }

    fn restart(&self) -> Screen {
        log::debug!("Restarting game");
        Screen::Game(Game::new(self.globals.clone()))
    }

    fn main_menu(&self) -> Screen {
        log::debug!("Returning to main menu");
        Screen::Main(MainMenu::new(self.globals.clone()))
    }

    fn running(&self) -> bool {
        self.state == GameState::Running
    }

    fn pause(&mut self) {
        self.state = GameState::Paused(Paused::new());
        self.next_tick = None;
    }

    fn game_over(&mut self, reason: GameOver) {
        log::info!(
            "Game over: {reason}; {} words spelled",
            self.words_spelled
        );
        self.state = GameState::Over(reason);
    }

    fn tick_period(&self) -> Duration {
        self.globals.options.speed.tick_period()
    }

    /// The size of the area needed to draw the game: a status bar, the
    /// bordered grid, and two lines of messages
    fn display_size(&self) -> Size {
        let board = self.board_size();
        Size {
            width: board.width.max(consts::GAME_MIN_WIDTH),
            height: board.height.saturating_add(3),
        }
    }

    /// The size of the grid on screen, including its border
    fn board_size(&self) -> Size {
        Size {
            width: self
                .bounds
                .width
                .saturating_mul(consts::CELL_WIDTH)
                .saturating_add(2),
            height: self.bounds.height.saturating_add(2),
        }
    }

    fn status_line(&self) -> Line<'static> {
        let [spelled, unspelled] = self.word.spans();
        Line::from_iter([
            Span::raw(format!(" Score: {}   Word: ", self.score)),
            spelled,
            unspelled,
            Span::raw(format!(
                "   Time: {}   Words: {}",
                self.clock, self.words_spelled
            )),
        ])
        .style(consts::SCORE_BAR_STYLE)
    }
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = center_rect(area, self.display_size());
        let [status_area, board_area, msg1_area, msg2_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(display);
        self.status_line().render(status_area, buf);

        let block_area = center_rect(board_area, self.board_size());
        if self.bounds.wrap {
            DottedBorder.render(block_area, buf);
        } else {
            Block::bordered().render(block_area, buf);
        }

        let mut grid = Canvas {
            area: block_area.inner(Margin::new(1, 1)),
            buf,
        };
        for block in &self.blocks {
            grid.draw_cell(block.position, &block.symbol(), block.style());
        }
        for p in self.snake.body() {
            grid.draw_cell(p, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        }
        // Draw the head last so that, if it's a collision, we overwrite
        // whatever it's colliding with
        if matches!(self.state, GameState::Over(reason) if reason.is_crash()) {
            grid.draw_cell(
                self.snake.head(),
                consts::COLLISION_SYMBOL,
                consts::COLLISION_STYLE,
            );
        } else {
            grid.draw_cell(
                self.snake.head(),
                self.snake.head_symbol(),
                consts::SNAKE_STYLE,
            );
        }

        match self.state {
            GameState::Running => (),
            GameState::Paused(paused) => {
                let pause_area = center_rect(
                    display,
                    Size {
                        width: Paused::WIDTH,
                        height: Paused::HEIGHT,
                    },
                );
                paused.render(pause_area, buf);
            }
            GameState::Over(reason) => {
                Span::from(format!(" — GAME OVER: {reason} —")).render(msg1_area, buf);
                Line::from_iter([
                    Span::raw(" Choose One: Restart ("),
                    Span::styled("r", consts::KEY_STYLE),
                    Span::raw(") — Main Menu ("),
                    Span::styled("m", consts::KEY_STYLE),
                    Span::raw(") — Quit ("),
                    Span::styled("q", consts::KEY_STYLE),
                    Span::raw(")"),
                ])
                .render(msg2_area, buf);
            }
        }
    }
}

/// A view of the grid cells inside the board's border
#[derive(Debug)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    /// The buffer cell at an offset from the canvas's top-left corner, if
    /// that offset lies within both the canvas and the buffer
    fn cell_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        if x >= self.area.width || y >= self.area.height {
            return None;
        }
        self.buf.cell_mut((self.area.x + x, self.area.y + y))
    }

    fn draw_char(&mut self, pos: Position, symbol: char) {
        if let Some(cell) = self.cell_mut(pos.x, pos.y) {
            cell.set_char(symbol);
        }
    }

    /// Draw the glyphs for grid cell `pos`, which spans
    /// [`consts::CELL_WIDTH`] columns
    fn draw_cell(&mut self, pos: Position, symbol: &str, style: Style) {
        let Some(x) = pos.x.checked_mul(consts::CELL_WIDTH) else {
            return;
        };
        for (i, ch) in (0..consts::CELL_WIDTH).zip(symbol.chars()) {
            let Some(x) = x.checked_add(i) else {
                return;
            };
            if let Some(cell) = self.cell_mut(x, pos.y) {
                cell.set_char(ch);
                cell.set_style(Style::reset().patch(style));
            }
        }
    }
}

/// Border drawn around a grid with wraparound enabled
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct DottedBorder;

impl Widget for DottedBorder {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let size = area.as_size();
        let max_x = size.width.saturating_sub(1);
        let max_y = size.height.saturating_sub(1);
        let mut canvas = Canvas { area, buf };
        for corner in [
            Position::ORIGIN,
            Position::new(max_x, 0),
            Position::new(max_x, max_y),
            Position::new(0, max_y),
        ] {
            canvas.draw_char(corner, '·');
        }
        for x in 1..max_x {
            canvas.draw_char(Position::new(x, 0), '⋯');
            canvas.draw_char(Position::new(x, max_y), '⋯');
        }
        for y in 1..max_y {
            canvas.draw_char(Position::new(0, y), '⋮');
            canvas.draw_char(Position::new(max_x, y), '⋮');
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum GameState {
    Running,
    Paused(Paused),
    Over(GameOver),
}

/// Why the game ended
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum GameOver {
    HitWall,
    HitSelf,
    TimeUp,
}

impl GameOver {
    fn is_crash(self) -> bool {
        matches!(self, GameOver::HitWall | GameOver::HitSelf)
    }
}

impl fmt::Display for GameOver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOver::HitWall => write!(f, "you hit the wall"),
            GameOver::HitSelf => write!(f, "you bit yourself"),
            GameOver::TimeUp => write!(f, "time's up"),
        }
    }
}
