//! Sentiment polarity scoring for task names.
//!
//! The ranking pipeline only needs the numeric contract: a score in
//! [-1.0, 1.0]. The trait keeps the scorer swappable; `LexiconSentiment`
//! is the default deterministic word-list implementation.

/// Anything that can turn text into a polarity score in [-1.0, 1.0].
pub trait SentimentScorer {
    fn score_polarity(&self, text: &str) -> f64;
}

const POSITIVE: &[&str] = &[
    "good", "great", "fun", "happy", "love", "enjoy", "relax", "relaxing",
    "nice", "awesome", "beautiful", "calm", "fresh", "delicious", "favorite",
    "easy", "new", "creative",
];

const NEGATIVE: &[&str] = &[
    "bad", "boring", "hate", "awful", "terrible", "annoying", "hard",
    "stress", "stressful", "sad", "angry", "tired", "chore", "ugly",
    "worst", "painful",
];

/// Word-list polarity: average of +1/-1 hits over recognized tokens,
/// 0.0 when nothing is recognized.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconSentiment;

impl LexiconSentiment {
    pub fn new() -> Self {
        Self
    }
}

impl SentimentScorer for LexiconSentiment {
    fn score_polarity(&self, text: &str) -> f64 {
        let mut hits = 0i32;
        let mut recognized = 0u32;

        for token in text
            .to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
        {
            if POSITIVE.contains(&token) {
                hits += 1;
                recognized += 1;
            } else if NEGATIVE.contains(&token) {
                hits -= 1;
                recognized += 1;
            }
        }

        if recognized == 0 {
            return 0.0;
        }

        (f64::from(hits) / f64::from(recognized)).clamp(-1.0, 1.0)
    }
}
