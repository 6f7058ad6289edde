/// Case-insensitive substring match; an empty query matches everything.
pub fn matches_search(name: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    name.to_lowercase().contains(&query.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_matches_everything() {
        assert!(matches_search("Rick Sanchez", ""));
        assert!(matches_search("", ""));
    }

    #[test]
    fn test_case_insensitive_containment() {
        assert!(matches_search("Morty Smith", "morty"));
        assert!(matches_search("Morty Smith", "SMITH"));
        assert!(matches_search("Abradolf Lincler", "dolf lin"));
        assert!(!matches_search("Birdperson", "morty"));
    }
}
