use crate::config::Rules;
use crate::consts;
use crate::options::Options;
use enum_map::Enum;
use ratatui::layout::{Rect, Size};

/// State shared by every screen of the application
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub(crate) struct Globals {
    /// The gameplay options currently selected in the main menu
    pub(crate) options: Options,

    /// Fixed rules of play read from the configuration file
    pub(crate) rules: Rules,
}

/// Return a rectangle of the given size centered within `area`.  If `size` is
/// larger than `area` in either dimension, the result is clipped to `area`.
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let width = size.width.min(area.width);
    let height = size.height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Return the area of the terminal in which the menus should be drawn
pub(crate) fn get_display_area(buffer_area: Rect) -> Rect {
    center_rect(buffer_area, consts::DISPLAY_SIZE)
}

/// Ordinal navigation over the variants of an [`Enum`]
pub(crate) trait EnumExt: Enum {
    fn min() -> Self {
        Self::from_usize(0)
    }

    fn max() -> Self {
        Self::from_usize(Self::LENGTH - 1)
    }

    fn next(self) -> Option<Self> {
        let i = self.into_usize() + 1;
        (i < Self::LENGTH).then(|| Self::from_usize(i))
    }

    fn prev(self) -> Option<Self> {
        self.into_usize().checked_sub(1).map(Self::from_usize)
    }

    fn iter() -> impl Iterator<Item = Self> {
        (0..Self::LENGTH).map(Self::from_usize)
    }
}

impl<T: Enum> EnumExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Rect::new(0, 0, 80, 24), Size::new(20, 10), Rect::new(30, 7, 20, 10))]
    #[case(Rect::new(4, 2, 21, 11), Size::new(10, 4), Rect::new(9, 5, 10, 4))]
    #[case(Rect::new(0, 0, 80, 24), Size::new(80, 24), Rect::new(0, 0, 80, 24))]
    #[case(Rect::new(0, 0, 40, 12), Size::new(80, 24), Rect::new(0, 0, 40, 12))]
    #[case(Rect::new(0, 0, 40, 30), Size::new(80, 24), Rect::new(0, 3, 40, 24))]
    fn test_center_rect(#[case] area: Rect, #[case] size: Size, #[case] centered: Rect) {
        assert_eq!(center_rect(area, size), centered);
    }

    #[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
    enum Stage {
        First,
        Middle,
        Last,
    }

    #[test]
    fn enum_navigation() {
        assert_eq!(Stage::min(), Stage::First);
        assert_eq!(Stage::max(), Stage::Last);
        assert_eq!(Stage::First.next(), Some(Stage::Middle));
        assert_eq!(Stage::Last.next(), None);
        assert_eq!(Stage::First.prev(), None);
        assert_eq!(Stage::Last.prev(), Some(Stage::Middle));
        assert_eq!(
            Stage::iter().collect::<Vec<_>>(),
            [Stage::First, Stage::Middle, Stage::Last]
        );
    }
}
