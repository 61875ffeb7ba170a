use serde_json::{json, Value};

use spoctl::error::CommandError;
use spoctl::resolve::{collapse_matches, Candidate, Choice, Disambiguate, NoPrompt};

/// Scripted disambiguator standing in for the terminal prompt
struct Scripted(Choice);

impl Disambiguate for Scripted {
    fn choose(&self, _entity: &str, _candidates: &[Candidate]) -> Choice {
        self.0
    }
}

fn describe(item: &Value) -> Candidate {
    Candidate {
        id: item["Id"].as_str().unwrap_or_default().to_string(),
        detail: item["Title"].as_str().unwrap_or_default().to_string(),
    }
}

#[test]
fn test_zero_matches_is_not_found_naming_the_lookup_value() {
    let result = collapse_matches("hub site", "Marketing", vec![], describe, &NoPrompt);

    match result {
        Err(CommandError::NotFound(message)) => {
            assert_eq!(message, "The specified hub site 'Marketing' does not exist.");
        }
        other => panic!("Expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_single_match_resolves_without_prompting() {
    let matches = vec![json!({ "Id": "id-one", "Title": "Marketing" })];
    let resolved = collapse_matches("hub site", "Marketing", matches, describe, &NoPrompt)
        .expect("single match should resolve");
    assert_eq!(resolved["Id"], "id-one");
}

#[test]
fn test_multiple_matches_without_prompting_lists_ids_in_response_order() {
    let matches = vec![
        json!({ "Id": "id-one", "Title": "Marketing" }),
        json!({ "Id": "id-two", "Title": "Marketing" }),
    ];
    let result = collapse_matches("hub site", "Marketing", matches, describe, &NoPrompt);

    match result {
        Err(CommandError::Ambiguous(message)) => {
            assert_eq!(
                message,
                "Multiple hub sites with 'Marketing' found. Found: id-one, id-two."
            );
        }
        other => panic!("Expected Ambiguous, got {:?}", other),
    }
}

#[test]
fn test_multiple_matches_with_selection_resolves_to_the_picked_record() {
    let matches = vec![
        json!({ "Id": "id-one", "Title": "Marketing" }),
        json!({ "Id": "id-two", "Title": "Marketing" }),
    ];
    let resolved = collapse_matches(
        "hub site",
        "Marketing",
        matches,
        describe,
        &Scripted(Choice::Selected(1)),
    )
    .expect("selection should resolve");
    assert_eq!(resolved["Id"], "id-two");
}

#[test]
fn test_declined_prompt_is_ambiguous() {
    let matches = vec![
        json!({ "Id": "id-one", "Title": "Marketing" }),
        json!({ "Id": "id-two", "Title": "Marketing" }),
    ];
    let result = collapse_matches(
        "hub site",
        "Marketing",
        matches,
        describe,
        &Scripted(Choice::Declined),
    );
    assert!(matches!(result, Err(CommandError::Ambiguous(_))));
}

#[test]
fn test_out_of_range_selection_is_treated_as_declined() {
    let matches = vec![
        json!({ "Id": "id-one", "Title": "Marketing" }),
        json!({ "Id": "id-two", "Title": "Marketing" }),
    ];
    let result = collapse_matches(
        "hub site",
        "Marketing",
        matches,
        describe,
        &Scripted(Choice::Selected(7)),
    );
    assert!(matches!(result, Err(CommandError::Ambiguous(_))));
}
