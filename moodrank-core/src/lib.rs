//! moodrank-core: mood matching, sentiment, and task ranking.
//!
//! Pure, synchronous, stateless. The only shared data is the `const`
//! mood-category table; everything else lives for one request.

pub mod matcher;
pub mod moods;
pub mod ranker;
pub mod request;
pub mod sentiment;
pub mod task;

pub use matcher::{match_mood, similarity_ratio};
pub use moods::{MoodCategory, MOOD_CATEGORIES};
pub use ranker::{filter_and_rank, score_task};
pub use request::{AnalyseRequest, ValidationError};
pub use sentiment::{LexiconSentiment, SentimentScorer};
pub use task::{EnergyLevel, ScoredTask, Task};
