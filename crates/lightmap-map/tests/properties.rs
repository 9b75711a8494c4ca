use std::collections::BTreeSet;

use proptest::prelude::*;
use serde_json::json;

use lightmap_map::{
    ExclusionList, MappingEngine, Outcome, PropertySpec, Record, Requirement, SourceKeys,
    SourceRecord, TargetMetadata, dispatch, resolve_source_key,
};

fn requirement() -> impl Strategy<Value = Requirement> {
    prop_oneof![
        Just(Requirement::Required),
        Just(Requirement::Optional),
        Just(Requirement::Nullable),
    ]
}

proptest! {
    #[test]
    fn first_present_candidate_wins(
        candidates in proptest::collection::vec("[a-e]{1,2}", 0..6),
        present in proptest::collection::btree_set("[a-e]{1,2}", 0..6),
    ) {
        let source: SourceRecord = present.iter().map(|k| (k.clone(), json!(k))).collect();
        let from = SourceKeys::Candidates(candidates.clone());
        let resolved = resolve_source_key(&source, "target", Some(&from));

        let expected = candidates
            .iter()
            .find(|c| present.contains(*c))
            .map_or("target", String::as_str);
        prop_assert_eq!(resolved, expected);
    }

    #[test]
    fn unmatched_candidates_fall_back_to_property(
        candidates in proptest::collection::vec("[a-c]{3}", 1..5),
        present in proptest::collection::btree_set("[x-z]{3}", 0..4),
    ) {
        let source: SourceRecord = present.iter().map(|k| (k.clone(), json!(1))).collect();
        let from = SourceKeys::Candidates(candidates);
        prop_assert_eq!(resolve_source_key(&source, "prop", Some(&from)), "prop");
    }

    #[test]
    fn requirement_matrix(requirement in requirement(), present in any::<bool>()) {
        let source = if present {
            SourceRecord::new().with("k", "v")
        } else {
            SourceRecord::new()
        };
        let raw = json!("v");
        let outcome = dispatch(requirement, &source, "k");
        let expected = match (present, requirement) {
            (true, _) => Outcome::Assign(&raw),
            (false, Requirement::Required) => Outcome::Missing,
            (false, Requirement::Optional) => Outcome::Untouched,
            (false, Requirement::Nullable) => Outcome::Null,
        };
        prop_assert_eq!(outcome, expected);
    }

    #[test]
    fn replacement_wins_unless_excluded(requirement in requirement(), present in any::<bool>()) {
        let mut metadata = TargetMetadata::new();
        metadata.attach("p", PropertySpec::new(requirement).source("src")).unwrap();
        let source = if present {
            SourceRecord::new().with("src", "from source")
        } else {
            SourceRecord::new()
        };
        let mut engine = MappingEngine::new();
        engine.replace("p", "replaced");

        let record = engine
            .map_into(Record::new(), &metadata, &source, &ExclusionList::new())
            .unwrap();
        prop_assert_eq!(record.get("p"), Some(&json!("replaced")));

        let excluded: ExclusionList = ["p"].into_iter().collect();
        let result = engine.map_into(Record::new(), &metadata, &source, &excluded);
        if requirement == Requirement::Required {
            prop_assert!(result.is_err());
        } else {
            prop_assert!(result.unwrap().is_empty());
        }
    }
}

#[test]
fn exclusion_list_ignores_duplicates() {
    let list: ExclusionList = ["a", "a", "b"].into_iter().collect();
    let names: BTreeSet<&str> = ["a", "b"].into_iter().collect();
    for name in names {
        assert!(list.contains(name));
    }
    assert!(!list.contains("c"));
}
