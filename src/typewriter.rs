//! The hero headline typewriter: types each phrase out, holds it, deletes it,
//! and moves on to the next, looping forever. Driven by a fixed interval tick
//! so the whole animation is a pure state machine.

/// Ticks the full phrase stays on screen before deletion starts. At the 90ms
/// tick used by the hero this is roughly the two-second hold of the original.
pub const HOLD_TICKS: u32 = 22;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Holding(u32),
    Deleting,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    phrase: usize,
    shown: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new(phrases: Vec<String>) -> Self {
        Self {
            phrases,
            phrase: 0,
            shown: 0,
            phase: Phase::Typing,
        }
    }

    /// The currently visible prefix of the active phrase.
    pub fn current(&self) -> String {
        match self.phrases.get(self.phrase) {
            Some(phrase) => phrase.chars().take(self.shown).collect(),
            None => String::new(),
        }
    }

    /// Advance one animation step and return the new visible text.
    pub fn tick(&mut self) -> String {
        let Some(phrase) = self.phrases.get(self.phrase) else {
            return String::new();
        };
        let len = phrase.chars().count();
        match self.phase {
            Phase::Typing => {
                if self.shown < len {
                    self.shown += 1;
                }
                if self.shown == len {
                    self.phase = Phase::Holding(HOLD_TICKS);
                }
            }
            Phase::Holding(remaining) => {
                if remaining == 0 {
                    self.phase = Phase::Deleting;
                } else {
                    self.phase = Phase::Holding(remaining - 1);
                }
            }
            Phase::Deleting => {
                if self.shown > 0 {
                    self.shown -= 1;
                }
                if self.shown == 0 {
                    self.phrase = (self.phrase + 1) % self.phrases.len();
                    self.phase = Phase::Typing;
                }
            }
        }
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phrases(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn types_one_character_per_tick() {
        let mut tw = Typewriter::new(phrases(&["Hi"]));
        assert_eq!(tw.current(), "");
        assert_eq!(tw.tick(), "H");
        assert_eq!(tw.tick(), "Hi");
    }

    #[test]
    fn holds_full_phrase_before_deleting() {
        let mut tw = Typewriter::new(phrases(&["ab"]));
        tw.tick();
        tw.tick(); // fully typed
        for _ in 0..=HOLD_TICKS {
            assert_eq!(tw.tick(), "ab");
        }
        assert_eq!(tw.tick(), "a");
    }

    #[test]
    fn cycles_through_phrases_and_wraps() {
        let mut tw = Typewriter::new(phrases(&["ab", "cd"]));
        let mut seen = Vec::new();
        for _ in 0..200 {
            seen.push(tw.tick());
        }
        assert!(seen.contains(&"ab".to_string()));
        assert!(seen.contains(&"cd".to_string()));
        // wraps back around to the first phrase
        let last_ab = seen.iter().rposition(|s| s == "ab").unwrap();
        let first_cd = seen.iter().position(|s| s == "cd").unwrap();
        assert!(last_ab > first_cd);
    }

    #[test]
    fn multibyte_phrases_step_by_character() {
        let mut tw = Typewriter::new(phrases(&["I ☕"]));
        assert_eq!(tw.tick(), "I");
        assert_eq!(tw.tick(), "I ");
        assert_eq!(tw.tick(), "I ☕");
    }

    #[test]
    fn empty_phrase_list_renders_nothing() {
        let mut tw = Typewriter::new(Vec::new());
        assert_eq!(tw.current(), "");
        assert_eq!(tw.tick(), "");
    }
}
