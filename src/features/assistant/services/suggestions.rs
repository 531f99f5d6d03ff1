/// Follow-up questions offered for any ticket
pub const BASE_SUGGESTIONS: [&str; 8] = [
    "What are the initial diagnostic steps?",
    "Show me the safety procedures for this equipment",
    "What tools will I need for this repair?",
    "Where can I find the technical manual?",
    "What are common causes of this issue?",
    "How long should this repair typically take?",
    "What replacement parts might be needed?",
    "Are there any known service bulletins for this model?",
];

const ELECTRICAL: [&str; 4] = [
    "What are the lockout/tagout procedures?",
    "How do I test voltage safely?",
    "Where's the electrical schematic?",
    "What's the proper grounding procedure?",
];

const MECHANICAL: [&str; 4] = [
    "What's the proper torque specification?",
    "Do I need special alignment tools?",
    "What's the bearing replacement procedure?",
    "How do I check for proper lubrication?",
];

const HVAC: [&str; 4] = [
    "What's the refrigerant pressure specification?",
    "How do I check airflow measurements?",
    "What's the proper evacuation procedure?",
    "Do I need EPA certification for this repair?",
];

/// Suggestions for a ticket category.
///
/// Known categories (case-insensitive) get four specific prompts followed by the
/// first four base suggestions; anything else gets the base list.
pub fn suggestions_for(category: Option<&str>) -> Vec<String> {
    let specific = match category.map(str::to_lowercase).as_deref() {
        Some("electrical") => &ELECTRICAL,
        Some("mechanical") => &MECHANICAL,
        Some("hvac") => &HVAC,
        _ => return BASE_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
    };

    specific
        .iter()
        .chain(BASE_SUGGESTIONS.iter().take(4))
        .map(|s| s.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_or_missing_category_returns_base() {
        assert_eq!(suggestions_for(None), BASE_SUGGESTIONS.to_vec());
        assert_eq!(suggestions_for(Some("plumbing")), BASE_SUGGESTIONS.to_vec());
        assert_eq!(suggestions_for(Some("")), BASE_SUGGESTIONS.to_vec());
    }

    #[test]
    fn test_category_prompts_come_first() {
        let suggestions = suggestions_for(Some("HVAC"));
        assert_eq!(suggestions.len(), 8);
        assert_eq!(suggestions[0], "What's the refrigerant pressure specification?");
        assert_eq!(suggestions[4], BASE_SUGGESTIONS[0]);
        assert_eq!(suggestions[7], BASE_SUGGESTIONS[3]);
    }

    #[test]
    fn test_electrical_and_mechanical() {
        assert_eq!(
            suggestions_for(Some("electrical"))[0],
            "What are the lockout/tagout procedures?"
        );
        assert_eq!(
            suggestions_for(Some("Mechanical"))[3],
            "How do I check for proper lubrication?"
        );
    }
}
