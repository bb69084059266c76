use rand::Rng;
use ratatui::{
    layout::Position,
    style::{Color, Style},
};

/// A colored tile bearing a single letter that the snake can eat
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct LetterBlock {
    pub(super) letter: char,
    pub(super) position: Position,
    pub(super) color: Color,
}

impl LetterBlock {
    pub(super) fn new(letter: char, position: Position, color: Color) -> LetterBlock {
        LetterBlock {
            letter,
            position,
            color,
        }
    }

    /// Return the glyphs used to draw the block: its letter followed by a
    /// blank
    pub(super) fn symbol(&self) -> String {
        format!("{} ", self.letter)
    }

    /// Style for the block: its own color as the background, with black or
    /// white text, whichever stands out more
    pub(super) fn style(&self) -> Style {
        Style::new().fg(contrasting_fg(self.color)).bg(self.color)
    }
}

/// Pick an uppercase ASCII letter uniformly at random
pub(super) fn random_letter<R: Rng>(rng: &mut R) -> char {
    char::from(b'A' + rng.random_range(0..26u8))
}

/// Pick a 24-bit color uniformly at random
pub(super) fn random_color<R: Rng>(rng: &mut R) -> Color {
    Color::Rgb(rng.random(), rng.random(), rng.random())
}

fn contrasting_fg(bg: Color) -> Color {
    let Color::Rgb(r, g, b) = bg else {
        return Color::Reset;
    };
    // ITU-R BT.601 luma, scaled by 1000
    let luma = 299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b);
    if luma > 150_000 {
        Color::Black
    } else {
        Color::White
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use rstest::rstest;

    #[rstest]
    #[case(Color::Rgb(0xFF, 0xFF, 0xFF), Color::Black)]
    #[case(Color::Rgb(0xF2, 0xE0, 0x40), Color::Black)]
    #[case(Color::Rgb(0x00, 0x00, 0x00), Color::White)]
    #[case(Color::Rgb(0x20, 0x30, 0xA0), Color::White)]
    #[case(Color::Red, Color::Reset)]
    fn test_contrasting_fg(#[case] bg: Color, #[case] fg: Color) {
        assert_eq!(contrasting_fg(bg), fg);
    }

    #[test]
    fn random_letters_are_uppercase() {
        let mut rng = ChaCha12Rng::seed_from_u64(0x0123456789ABCDEF);
        for _ in 0..200 {
            assert!(random_letter(&mut rng).is_ascii_uppercase());
        }
    }

    #[test]
    fn random_colors_are_rgb() {
        let mut rng = ChaCha12Rng::seed_from_u64(0x0123456789ABCDEF);
        assert!(matches!(random_color(&mut rng), Color::Rgb(..)));
    }

    #[test]
    fn block_appearance() {
        let block = LetterBlock::new('Q', Position::new(1, 2), Color::Rgb(0, 0, 0x80));
        assert_eq!(block.symbol(), "Q ");
        assert_eq!(
            block.style(),
            Style::new().fg(Color::White).bg(Color::Rgb(0, 0, 0x80))
        );
    }
}
