use crate::consts;
use ratatui::{
    buffer::Buffer,
    layout::{Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::Widget,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Logo;

impl Logo {
    const TEXT: &'static str = "WORDSNAKE";
    const TILE_WIDTH: u16 = 3;
    const TILE_GUTTER: u16 = 1;
    const DIAGRAM_BODY_LENGTH: usize = 5;

    pub(super) const HEIGHT: u16 = 3;

    #[allow(clippy::cast_possible_truncation)]
    pub(super) const WIDTH: u16 = {
        let tiles = Self::TEXT.len() as u16;
        tiles * Self::TILE_WIDTH + (tiles - 1) * Self::TILE_GUTTER
    };

    pub(super) fn tile_style(i: usize) -> Style {
        Style::new()
            .fg(Color::Black)
            .bg(consts::LOGO_COLORS[i % consts::LOGO_COLORS.len()])
            .add_modifier(Modifier::BOLD)
    }
}

impl Widget for Logo {
    /*
     *  W   O   R   D   S   N   A   K   E
     *
     *          ██████████<<  W
     */
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [tiles_area, _, diagram_area] = Layout::vertical([1, 1, 1]).areas(area);
        let gutter = " ".repeat(usize::from(Self::TILE_GUTTER));
        let mut tiles = Vec::new();
        for (i, c) in Self::TEXT.chars().enumerate() {
            if i > 0 {
                tiles.push(Span::raw(gutter.clone()));
            }
            tiles.push(Span::styled(format!(" {c} "), Self::tile_style(i)));
        }
        Line::from(tiles).render(tiles_area, buf);
        Line::from_iter([
            Span::styled(
                consts::SNAKE_BODY_SYMBOL.repeat(Self::DIAGRAM_BODY_LENGTH),
                consts::SNAKE_STYLE,
            ),
            Span::styled(consts::SNAKE_HEAD_EAST_SYMBOL, consts::SNAKE_STYLE),
            Span::raw("  "),
            Span::styled("W ", Self::tile_style(0)),
        ])
        .centered()
        .render(diagram_area, buf);
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Instructions;

impl Instructions {
    pub(super) const HEIGHT: u16 = 6;
    pub(super) const WIDTH: u16 = 28;
}

impl Widget for Instructions {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let keys = |prefix: &'static str, ks: [&'static str; 4]| {
            let mut spans = vec![Span::raw(prefix)];
            for (i, k) in ks.into_iter().enumerate() {
                if i > 0 {
                    spans.push(Span::raw(" "));
                }
                spans.push(Span::styled(k, consts::KEY_STYLE));
            }
            Line::from(spans)
        };
        let text = Text::from_iter([
            Line::from("Move the snake with:"),
            keys("       ", ["←", "↓", "↑", "→"]),
            keys("   or: ", ["h", "j", "k", "l"]),
            keys("   or: ", ["a", "s", "w", "d"]),
            Line::from("Eat the letters of the word"),
            Line::from("in order, against the clock!"),
        ]);
        debug_assert_eq!(
            text.height(),
            usize::from(Self::HEIGHT),
            "Instructions::HEIGHT is wrong"
        );
        debug_assert_eq!(
            text.width(),
            usize::from(Self::WIDTH),
            "Instructions::WIDTH is wrong"
        );
        text.render(area, buf);
    }
}
