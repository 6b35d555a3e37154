use strsim::normalized_levenshtein;

/// Minimum similarity a candidate title must reach to count as a match.
/// Mirrors the 0.6 default of the usual close-match utilities.
pub const MATCH_CUTOFF: f64 = 0.6;

/// Finds the known title closest to a free-text query.
///
/// Scoring is case-insensitive normalized Levenshtein similarity. Returns
/// the index and title of the best candidate at or above [`MATCH_CUTOFF`],
/// or `None` when nothing clears it. Ties keep the earliest-indexed title.
pub fn closest_title<'a>(query: &str, titles: &'a [String]) -> Option<(usize, &'a str)> {
    let query = query.to_lowercase();
    let mut best: Option<(usize, f64)> = None;

    for (index, title) in titles.iter().enumerate() {
        let score = normalized_levenshtein(&query, &title.to_lowercase());
        if score < MATCH_CUTOFF {
            continue;
        }
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((index, score)),
        }
    }

    best.map(|(index, _)| (index, titles[index].as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_exact_title_matches_itself() {
        let catalog = titles(&["Inception", "Interstellar", "Inside Out"]);
        let (index, title) = closest_title("Interstellar", &catalog).unwrap();
        assert_eq!(index, 1);
        assert_eq!(title, "Interstellar");
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let catalog = titles(&["The Dark Knight"]);
        let (_, title) = closest_title("the dark knight", &catalog).unwrap();
        assert_eq!(title, "The Dark Knight");
    }

    #[test]
    fn test_near_miss_spelling_matches() {
        let catalog = titles(&["Gladiator", "Goodfellas"]);
        let (_, title) = closest_title("Gladaitor", &catalog).unwrap();
        assert_eq!(title, "Gladiator");
    }

    #[test]
    fn test_gibberish_does_not_match() {
        let catalog = titles(&["Casablanca", "Vertigo"]);
        assert!(closest_title("xqzzv pllmw", &catalog).is_none());
    }

    #[test]
    fn test_empty_query_does_not_match() {
        let catalog = titles(&["Casablanca"]);
        assert!(closest_title("", &catalog).is_none());
    }

    #[test]
    fn test_ties_keep_earliest_title() {
        // Duplicate titles score identically; the first occurrence wins.
        let catalog = titles(&["Heat", "Heat"]);
        let (index, _) = closest_title("Heat", &catalog).unwrap();
        assert_eq!(index, 0);
    }

    #[test]
    fn test_empty_catalog_yields_no_match() {
        assert!(closest_title("Anything", &[]).is_none());
    }
}
