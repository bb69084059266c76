use crate::consts;
use enum_dispatch::enum_dispatch;
use enum_map::Enum;
use serde::Deserialize;
use std::fmt;
use std::time::Duration;

/// Gameplay options that can be adjusted in the main menu
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct Options {
    pub(crate) speed: Speed,
    pub(crate) letters: LetterQty,
    pub(crate) wraparound: bool,
}

impl Options {
    pub(crate) fn get(&self, key: OptKey) -> OptValue {
        match key {
            OptKey::Speed => self.speed.into(),
            OptKey::Letters => self.letters.into(),
            OptKey::Wraparound => self.wraparound.into(),
        }
    }

    pub(crate) fn set(&mut self, key: OptKey, value: OptValue) {
        match key {
            OptKey::Speed => {
                self.speed = value
                    .try_into()
                    .expect("Options::set(Speed, value) called with non-Speed value");
            }
            OptKey::Letters => {
                self.letters = value
                    .try_into()
                    .expect("Options::set(Letters, value) called with non-LetterQty value");
            }
            OptKey::Wraparound => {
                self.wraparound = value
                    .try_into()
                    .expect("Options::set(Wraparound, value) called with non-Bool value");
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
pub(crate) enum OptKey {
    Speed,
    Letters,
    Wraparound,
}

impl OptKey {
    pub(crate) const DISPLAY_WIDTH: u16 = 10;

    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            OptKey::Speed => "Speed",
            OptKey::Letters => "Letters",
            OptKey::Wraparound => "Wraparound",
        }
    }
}

impl fmt::Display for OptKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[enum_dispatch]
pub(crate) trait Adjustable {
    fn increase(&mut self);
    fn decrease(&mut self);
    fn toggle(&mut self);
    fn can_increase(&self) -> bool;
    fn can_decrease(&self) -> bool;
}

#[enum_dispatch(Adjustable)] // This also gives us From and TryInto
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum OptValue {
    Bool(bool),
    Speed,
    LetterQty,
}

impl OptValue {
    pub(crate) const DISPLAY_WIDTH: u16 = 10;

    fn arrows(&self) -> (char, char) {
        (
            if self.can_decrease() { '◀' } else { '◁' },
            if self.can_increase() { '▶' } else { '▷' },
        )
    }
}

// This is needed for EnumMap to be convenient to construct.
impl Default for OptValue {
    fn default() -> OptValue {
        OptValue::Bool(false)
    }
}

impl fmt::Display for OptValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (left, right) = self.arrows();
        match *self {
            OptValue::Bool(false) => write!(f, "   [ ]    "),
            OptValue::Bool(true) => write!(f, "   [✓]    "),
            OptValue::Speed(speed) => write!(f, "{left} {speed:6} {right}"),
            OptValue::LetterQty(qty) => write!(f, "{left} {qty:^6} {right}"),
        }
    }
}

impl Adjustable for bool {
    fn increase(&mut self) {
        *self = true;
    }

    fn decrease(&mut self) {
        *self = false;
    }

    fn toggle(&mut self) {
        *self = !*self;
    }

    fn can_increase(&self) -> bool {
        !*self
    }

    fn can_decrease(&self) -> bool {
        *self
    }
}

/// How fast the snake moves
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Speed {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl Speed {
    pub(crate) const MINIMUM: Speed = Speed::Slow;
    pub(crate) const MAXIMUM: Speed = Speed::Fast;

    /// Time between movements of the snake
    pub(crate) fn tick_period(self) -> Duration {
        match self {
            Speed::Slow => Duration::from_millis(150),
            Speed::Normal => Duration::from_millis(100),
            Speed::Fast => Duration::from_millis(70),
        }
    }
}

impl fmt::Display for Speed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Speed::Slow => "Slow",
            Speed::Normal => "Normal",
            Speed::Fast => "Fast",
        };
        f.pad(name)
    }
}

impl Adjustable for Speed {
    fn increase(&mut self) {
        match self {
            Speed::Slow => *self = Speed::Normal,
            Speed::Normal => *self = Speed::Fast,
            Speed::Fast => (),
        }
    }

    fn decrease(&mut self) {
        match self {
            Speed::Slow => (),
            Speed::Normal => *self = Speed::Slow,
            Speed::Fast => *self = Speed::Normal,
        }
    }

    fn toggle(&mut self) {}

    fn can_increase(&self) -> bool {
        *self != Self::MAXIMUM
    }

    fn can_decrease(&self) -> bool {
        *self != Self::MINIMUM
    }
}

/// Number of letter blocks placed on the grid at the start of each round.
/// This is never less than the length of a target word.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(try_from = "usize")]
pub(crate) struct LetterQty(usize);

impl LetterQty {
    pub(crate) fn new(qty: usize) -> Option<LetterQty> {
        (consts::WORD_LENGTH..=consts::MAX_LETTERS)
            .contains(&qty)
            .then_some(LetterQty(qty))
    }

    pub(crate) fn get(self) -> usize {
        self.0
    }
}

impl Default for LetterQty {
    fn default() -> LetterQty {
        LetterQty(consts::DEFAULT_LETTERS)
    }
}

impl TryFrom<usize> for LetterQty {
    type Error = String;

    fn try_from(qty: usize) -> Result<LetterQty, String> {
        LetterQty::new(qty).ok_or_else(|| {
            format!(
                "letters must be between {} and {}, got {qty}",
                consts::WORD_LENGTH,
                consts::MAX_LETTERS
            )
        })
    }
}

impl fmt::Display for LetterQty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0.to_string())
    }
}

impl Adjustable for LetterQty {
    fn increase(&mut self) {
        if self.can_increase() {
            self.0 += 1;
        }
    }

    fn decrease(&mut self) {
        if self.can_decrease() {
            self.0 -= 1;
        }
    }

    fn toggle(&mut self) {}

    fn can_increase(&self) -> bool {
        self.0 < consts::MAX_LETTERS
    }

    fn can_decrease(&self) -> bool {
        self.0 > consts::WORD_LENGTH
    }
}
