//! Task scoring, filtering and ranking against a matched mood.

use std::collections::HashSet;

use crate::matcher::match_mood;
use crate::moods::MoodCategory;
use crate::sentiment::SentimentScorer;
use crate::task::{EnergyLevel, ScoredTask, Task};

/// Score one task against the matched mood, requested energy, and time budget.
///
/// score = 2 * |task.tags ∩ mood.tags|
///       + sentiment(task.name)
///       + 1 if energy matches
///       + 1 if the task fits the time budget
pub fn score_task(
    task: &Task,
    mood: &MoodCategory,
    user_energy: EnergyLevel,
    max_time: u32,
    sentiment: &dyn SentimentScorer,
) -> f64 {
    let task_tags: HashSet<&str> = task.tags.iter().map(String::as_str).collect();
    let tag_match = mood
        .tags
        .iter()
        .filter(|t| task_tags.contains(**t))
        .count();

    let sentiment_score = sentiment.score_polarity(&task.name);
    let energy_match = if task.energy == user_energy { 1.0 } else { 0.0 };
    let time_match = if task.time <= max_time { 1.0 } else { 0.0 };

    (tag_match as f64) * 2.0 + sentiment_score + energy_match + time_match
}

/// Run the full pipeline: match the mood, score every task, drop
/// non-positive scores, sort descending (stable, so equal scores keep
/// their input order), and return the surviving names.
pub fn filter_and_rank(
    tasks: &[Task],
    user_mood: &str,
    user_energy: EnergyLevel,
    max_time: u32,
    categories: &[MoodCategory],
    sentiment: &dyn SentimentScorer,
) -> Vec<String> {
    let Some(mood) = match_mood(user_mood, categories) else {
        return Vec::new();
    };

    let mut scored: Vec<ScoredTask> = tasks
        .iter()
        .map(|t| ScoredTask {
            name: t.name.clone(),
            score: score_task(t, mood, user_energy, max_time, sentiment),
        })
        .collect();

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));

    scored
        .into_iter()
        .filter(|s| s.score > 0.0)
        .map(|s| s.name)
        .collect()
}
