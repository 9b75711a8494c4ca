//! Source key resolution.

use lightmap_model::{SourceKeys, SourceRecord};

/// Picks the source key a property reads from.
///
/// - no `from`: the property name itself
/// - a single key: that key, whether or not the source has it
/// - candidates: the first key present in `source`, else the property name
pub fn resolve_source_key<'a>(
    source: &SourceRecord,
    property: &'a str,
    from: Option<&'a SourceKeys>,
) -> &'a str {
    match from {
        None => property,
        Some(SourceKeys::Single(key)) => key.as_str(),
        Some(SourceKeys::Candidates(candidates)) => candidates
            .iter()
            .find(|candidate| source.contains_key(candidate))
            .map_or(property, String::as_str),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn source() -> SourceRecord {
        SourceRecord::new().with("x", json!(1)).with("y", json!(2))
    }

    #[test]
    fn defaults_to_property_name() {
        assert_eq!(resolve_source_key(&source(), "a", None), "a");
    }

    #[test]
    fn first_present_candidate_wins() {
        let from = SourceKeys::from(vec!["missing", "y", "x"]);
        assert_eq!(resolve_source_key(&source(), "a", Some(&from)), "y");
    }

    #[test]
    fn candidates_fall_back_to_property_name() {
        let from = SourceKeys::from(vec!["p", "q"]);
        assert_eq!(resolve_source_key(&source(), "a", Some(&from)), "a");

        let empty = SourceKeys::Candidates(Vec::new());
        assert_eq!(resolve_source_key(&source(), "a", Some(&empty)), "a");
    }

    #[test]
    fn single_key_is_returned_even_when_absent() {
        let from = SourceKeys::from("nowhere");
        assert_eq!(resolve_source_key(&source(), "x", Some(&from)), "nowhere");
    }
}
