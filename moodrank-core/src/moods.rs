//! The fixed mood-category table.
//!
//! Read-only lookup data baked in at compile time. Order matters: ties in
//! mood matching keep the first category in this list.

/// A named mood with its descriptive tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodCategory {
    pub name: &'static str,
    pub tags: &'static [&'static str],
}

/// The five predefined mood categories.
pub const MOOD_CATEGORIES: &[MoodCategory] = &[
    MoodCategory { name: "happy", tags: &["fun", "joy", "relaxing", "social"] },
    MoodCategory { name: "sad", tags: &["calm", "reflective", "quiet"] },
    MoodCategory { name: "angry", tags: &["physical", "outlet", "productive"] },
    MoodCategory { name: "focused", tags: &["work", "study", "concentration"] },
    MoodCategory { name: "relaxed", tags: &["easy", "simple", "peaceful"] },
];
