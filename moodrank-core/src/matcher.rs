//! Mood matching: map a free-text mood to the closest predefined category.
//!
//! Similarity is the classic sequence-matching ratio, 2*M / (len_a + len_b),
//! where M counts characters covered by matching blocks (longest common
//! substring, then recurse on both sides). The input is compared against
//! category NAMES only, not tags.

use crate::moods::MoodCategory;

/// Total characters covered by matching blocks between `a` and `b`.
fn matching_chars(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    // Longest common substring via rolling DP row. Strict `>` keeps the
    // earliest block on ties, like SequenceMatcher.
    let mut best_len = 0usize;
    let mut best_a = 0usize;
    let mut best_b = 0usize;
    let mut row = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        let mut prev = 0usize;
        for (j, cb) in b.iter().enumerate() {
            let tmp = row[j + 1];
            if ca == cb {
                row[j + 1] = prev + 1;
                if row[j + 1] > best_len {
                    best_len = row[j + 1];
                    best_a = i + 1 - best_len;
                    best_b = j + 1 - best_len;
                }
            } else {
                row[j + 1] = 0;
            }
            prev = tmp;
        }
    }

    if best_len == 0 {
        return 0;
    }

    best_len
        + matching_chars(&a[..best_a], &b[..best_b])
        + matching_chars(&a[best_a + best_len..], &b[best_b + best_len..])
}

/// Normalized similarity in [0, 1]. Two empty strings are identical (1.0).
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }
    2.0 * matching_chars(&a, &b) as f64 / total as f64
}

/// Pick the category whose name is most similar to `user_mood`.
///
/// Always returns a best match (possibly a weak one) as long as the table
/// is non-empty; ties keep the first category in table order.
pub fn match_mood<'a>(
    user_mood: &str,
    categories: &'a [MoodCategory],
) -> Option<&'a MoodCategory> {
    let mut best: Option<(&MoodCategory, f64)> = None;

    for cat in categories {
        let sim = similarity_ratio(user_mood, cat.name);
        match best {
            None => best = Some((cat, sim)),
            Some((_, best_sim)) if sim > best_sim => best = Some((cat, sim)),
            _ => {}
        }
    }

    best.map(|(cat, _)| cat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moods::MOOD_CATEGORIES;

    #[test]
    fn test_ratio_identical() {
        assert_eq!(similarity_ratio("happy", "happy"), 1.0);
    }

    #[test]
    fn test_ratio_empty_vs_nonempty() {
        assert_eq!(similarity_ratio("", "sad"), 0.0);
        assert_eq!(similarity_ratio("", ""), 1.0);
    }

    #[test]
    fn test_ratio_partial_overlap() {
        // "abcd" vs "bcde": matching block "bcd" -> 2*3/8
        assert!((similarity_ratio("abcd", "bcde") - 0.75).abs() < 1e-9);
        // "hap" vs "happy" -> 2*3/8
        assert!((similarity_ratio("hap", "happy") - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_ratio_disjoint_is_zero() {
        assert_eq!(similarity_ratio("xyz", "sad"), 0.0);
    }

    #[test]
    fn test_exact_mood_matches_itself() {
        let m = match_mood("happy", MOOD_CATEGORIES).unwrap();
        assert_eq!(m.name, "happy");
    }

    #[test]
    fn test_near_miss_resolves() {
        assert_eq!(match_mood("focus", MOOD_CATEGORIES).unwrap().name, "focused");
        assert_eq!(match_mood("hapy", MOOD_CATEGORIES).unwrap().name, "happy");
    }

    #[test]
    fn test_weak_input_still_matches_first_best() {
        // "xyz123" shares only a 'y' with "happy" and "angry"; the tie keeps
        // the earlier table entry.
        assert_eq!(match_mood("xyz123", MOOD_CATEGORIES).unwrap().name, "happy");
    }

    #[test]
    fn test_empty_mood_falls_back_to_first_category() {
        let m = match_mood("", MOOD_CATEGORIES).unwrap();
        assert_eq!(m.name, MOOD_CATEGORIES[0].name);
    }

    #[test]
    fn test_empty_table_is_none() {
        assert!(match_mood("happy", &[]).is_none());
    }

    #[test]
    fn test_deterministic() {
        let a = match_mood("grumpy", MOOD_CATEGORIES).unwrap().name;
        let b = match_mood("grumpy", MOOD_CATEGORIES).unwrap().name;
        assert_eq!(a, b);
    }
}
