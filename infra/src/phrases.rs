//! Random phrase source

use courier_core::services::message::PhraseSource;
use rand::seq::SliceRandom;

const DEFAULT_PHRASES: &[&str] = &[
    "Hello there",
    "Good morning",
    "Good afternoon",
    "Good evening",
    "Greetings",
    "Howdy",
    "Welcome",
    "Nice to see you",
];

/// Picks one phrase at random from a fixed list
#[derive(Debug, Clone)]
pub struct RandomPhraseSource {
    phrases: Vec<String>,
}

impl RandomPhraseSource {
    pub fn new() -> Self {
        Self::with_phrases(DEFAULT_PHRASES.iter().map(|p| p.to_string()))
    }

    /// Uses `phrases` instead of the built-in list; an empty list falls back
    /// to the built-in one
    pub fn with_phrases<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases: Vec<String> = phrases.into_iter().map(Into::into).collect();
        if phrases.is_empty() {
            return Self::new();
        }
        Self { phrases }
    }
}

impl Default for RandomPhraseSource {
    fn default() -> Self {
        Self::new()
    }
}

impl PhraseSource for RandomPhraseSource {
    fn phrase(&self) -> String {
        self.phrases
            .choose(&mut rand::thread_rng())
            .cloned()
            .unwrap_or_default()
    }
}
