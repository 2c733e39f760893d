//! Text scramble effect for the connect indicator.
//!
//! While the assistant connection is being established, the status line
//! shows the target text "decoding" into place: unrevealed characters
//! cycle through a glyph table, and one more character is revealed every
//! few ticks.
//!
//! The state machine is deterministic and owns no timer: the caller
//! drives it by calling [`Scramble::tick`] on whatever cadence it likes
//! and rendering [`Scramble::frame`] after each tick.

/// Glyphs shown in place of unrevealed characters.
const GLYPHS: [char; 8] = ['#', '@', '%', '&', '$', '+', '=', '*'];

/// Ticks between two reveals.
const TICKS_PER_REVEAL: u64 = 2;

/// Deterministic scramble-reveal state for one line of text.
#[derive(Debug, Clone)]
pub struct Scramble {
    target: Vec<char>,
    revealed: usize,
    ticks: u64,
}

impl Scramble {
    pub fn new(target: impl AsRef<str>) -> Self {
        Self {
            target: target.as_ref().chars().collect(),
            revealed: 0,
            ticks: 0,
        }
    }

    /// Advance the animation by one step.
    pub fn tick(&mut self) {
        self.ticks += 1;
        if self.ticks % TICKS_PER_REVEAL == 0 && self.revealed < self.target.len() {
            self.revealed += 1;
        }
    }

    /// Whether every character has been revealed.
    pub fn is_done(&self) -> bool {
        self.revealed >= self.target.len()
    }

    /// Render the current frame.
    ///
    /// The first `revealed` characters show as themselves. The rest cycle
    /// through the glyph table, offset by the tick counter so they appear
    /// to churn. Whitespace is never scrambled, so word shapes stay
    /// readable throughout.
    pub fn frame(&self) -> String {
        self.target
            .iter()
            .enumerate()
            .map(|(i, &ch)| {
                if i < self.revealed || ch.is_whitespace() {
                    ch
                } else {
                    GLYPHS[(self.ticks as usize + i) % GLYPHS.len()]
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_has_target_length() {
        let scramble = Scramble::new("Connecting");
        assert_eq!(scramble.frame().chars().count(), 10);
    }

    #[test]
    fn whitespace_is_never_scrambled() {
        let scramble = Scramble::new("a b c");
        let frame = scramble.frame();
        assert_eq!(frame.chars().nth(1), Some(' '));
        assert_eq!(frame.chars().nth(3), Some(' '));
    }

    #[test]
    fn reveals_left_to_right() {
        let mut scramble = Scramble::new("abc");
        scramble.tick();
        scramble.tick();
        let frame = scramble.frame();
        assert!(frame.starts_with('a'));
        assert_ne!(frame.chars().nth(2), Some('c'));
    }

    #[test]
    fn finishes_with_the_exact_target() {
        let mut scramble = Scramble::new("done yet?");
        for _ in 0..100 {
            scramble.tick();
        }
        assert!(scramble.is_done());
        assert_eq!(scramble.frame(), "done yet?");
    }

    #[test]
    fn same_tick_count_gives_same_frame() {
        let mut a = Scramble::new("repeatable");
        let mut b = Scramble::new("repeatable");
        for _ in 0..5 {
            a.tick();
            b.tick();
        }
        assert_eq!(a.frame(), b.frame());
    }

    #[test]
    fn empty_target_is_immediately_done() {
        let scramble = Scramble::new("");
        assert!(scramble.is_done());
        assert_eq!(scramble.frame(), "");
    }
}
