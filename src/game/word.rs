use crate::consts;
use ratatui::{style::Style, text::Span};
use std::fmt;

/// The word the player is currently trying to spell, along with how much of
/// it has been spelled so far
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct TargetWord {
    letters: Vec<char>,
    spelled: usize,
}

impl TargetWord {
    pub(super) fn new<I: IntoIterator<Item = char>>(letters: I) -> TargetWord {
        TargetWord {
            letters: letters.into_iter().collect(),
            spelled: 0,
        }
    }

    /// The next letter that needs to be eaten, if any
    pub(super) fn next(&self) -> Option<char> {
        self.letters.get(self.spelled).copied()
    }

    /// The letters that have yet to be eaten, in order
    pub(super) fn remaining(&self) -> &[char] {
        &self.letters[self.spelled..]
    }

    /// If `letter` is the next letter of the word, mark it as spelled and
    /// return `true`; otherwise, return `false`.
    pub(super) fn accept(&mut self, letter: char) -> bool {
        if self.next() == Some(letter) {
            self.spelled += 1;
            true
        } else {
            false
        }
    }

    pub(super) fn is_complete(&self) -> bool {
        self.spelled >= self.letters.len()
    }

    /// Render the word as spans for display, with the letters already eaten
    /// styled as [`consts::SPELLED_STYLE`]
    pub(super) fn spans(&self) -> [Span<'static>; 2] {
        let (done, todo) = self.letters.split_at(self.spelled);
        [
            Span::styled(String::from_iter(done), consts::SPELLED_STYLE),
            Span::styled(String::from_iter(todo), Style::new()),
        ]
    }
}

impl fmt::Display for TargetWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.letters.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spell_in_order() {
        let mut word = TargetWord::new("CAT".chars());
        assert_eq!(word.next(), Some('C'));
        assert!(!word.accept('A'));
        assert_eq!(word.remaining(), ['C', 'A', 'T']);
        assert!(word.accept('C'));
        assert!(word.accept('A'));
        assert!(!word.is_complete());
        assert_eq!(word.remaining(), ['T']);
        assert!(word.accept('T'));
        assert!(word.is_complete());
        assert_eq!(word.next(), None);
        assert!(!word.accept('T'));
    }

    #[test]
    fn repeated_letters() {
        let mut word = TargetWord::new("ZZA".chars());
        assert!(word.accept('Z'));
        assert!(word.accept('Z'));
        assert!(!word.accept('Z'));
        assert_eq!(word.remaining(), ['A']);
    }

    #[test]
    fn spans_split_at_progress() {
        let mut word = TargetWord::new("DOG".chars());
        word.accept('D');
        let [done, todo] = word.spans();
        assert_eq!(done.content, "D");
        assert_eq!(done.style, consts::SPELLED_STYLE);
        assert_eq!(todo.content, "OG");
        assert_eq!(word.to_string(), "DOG");
    }
}
