use crate::model::champion::AnnotatedChampion;

/// A query never surfaces more than this many matches.
pub const MAX_RESULTS: usize = 5;

/// Case-insensitive substring match over champion names. Matches keep the
/// flattened role-major order; there is no further ranking. An empty query
/// matches nothing.
pub fn search_champions(all_champions: &[AnnotatedChampion], query: &str) -> Vec<AnnotatedChampion> {
    if query.is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    all_champions
        .iter()
        .filter(|champ| champ.name().to_lowercase().contains(&needle))
        .take(MAX_RESULTS)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::champion::ChampionRecord;

    fn annotated(role: &str, name: &str) -> AnnotatedChampion {
        AnnotatedChampion {
            role: role.to_string(),
            record: ChampionRecord {
                name: name.to_string(),
                winrate: None,
                pick_rate: None,
                counters: Vec::new(),
            },
        }
    }

    #[test]
    fn empty_query_matches_nothing() {
        let all = vec![annotated("top", "Darius")];
        assert!(search_champions(&all, "").is_empty());
    }

    #[test]
    fn match_is_case_insensitive_substring() {
        let all = vec![
            annotated("top", "Darius"),
            annotated("mid", "Ahri"),
            annotated("adc", "Draven"),
        ];

        let hits = search_champions(&all, "DR");
        let names: Vec<_> = hits.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["Draven"]);

        let hits = search_champions(&all, "ar");
        let names: Vec<_> = hits.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["Darius"]);
    }

    #[test]
    fn results_keep_flattened_order_and_cap_at_five() {
        let all = vec![
            annotated("top", "Anivia"),
            annotated("top", "Annie"),
            annotated("jungle", "Ahri"),
            annotated("jungle", "Akali"),
            annotated("mid", "Akshan"),
            annotated("mid", "Alistar"),
            annotated("adc", "Amumu"),
        ];

        let hits = search_champions(&all, "a");
        assert_eq!(hits.len(), MAX_RESULTS);
        let names: Vec<_> = hits.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["Anivia", "Annie", "Ahri", "Akali", "Akshan"]);
    }

    #[test]
    fn every_hit_contains_the_query() {
        let all = vec![
            annotated("top", "Garen"),
            annotated("mid", "Morgana"),
            annotated("adc", "Varus"),
        ];

        for hit in search_champions(&all, "ar") {
            assert!(hit.name().to_lowercase().contains("ar"));
        }
    }
}
