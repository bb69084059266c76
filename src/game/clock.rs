use std::fmt;
use std::time::Duration;

/// Game time left before the game is over
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Clock {
    remaining: Duration,
}

impl Clock {
    pub(super) fn new(remaining: Duration) -> Clock {
        Clock { remaining }
    }

    /// Let `elapsed` time pass.  Returns `true` if time has run out.
    pub(super) fn tick(&mut self, elapsed: Duration) -> bool {
        self.remaining = self.remaining.saturating_sub(elapsed);
        self.expired()
    }

    pub(super) fn extend(&mut self, extra: Duration) {
        self.remaining = self.remaining.saturating_add(extra);
    }

    pub(super) fn expired(&self) -> bool {
        self.remaining.is_zero()
    }

    #[cfg(test)]
    pub(super) fn remaining(&self) -> Duration {
        self.remaining
    }
}

/// Displays the remaining time as `MM:SS`, rounding down to the second
impl fmt::Display for Clock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let secs = self.remaining.as_secs();
        write!(f, "{:02}:{:02}", secs / 60, secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Duration::from_secs(300), "05:00")]
    #[case(Duration::from_millis(299_900), "04:59")]
    #[case(Duration::from_secs(59), "00:59")]
    #[case(Duration::from_millis(999), "00:00")]
    #[case(Duration::ZERO, "00:00")]
    #[case(Duration::from_secs(100 * 60 + 5), "100:05")]
    fn display(#[case] remaining: Duration, #[case] s: &str) {
        assert_eq!(Clock::new(remaining).to_string(), s);
    }

    #[test]
    fn tick_down_to_zero() {
        let mut clock = Clock::new(Duration::from_millis(250));
        assert!(!clock.tick(Duration::from_millis(100)));
        assert!(!clock.tick(Duration::from_millis(100)));
        assert!(clock.tick(Duration::from_millis(100)));
        assert_eq!(clock.remaining(), Duration::ZERO);
        assert!(clock.expired());
        clock.extend(Duration::from_secs(60));
        assert!(!clock.expired());
        assert_eq!(clock.to_string(), "01:00");
    }
}
