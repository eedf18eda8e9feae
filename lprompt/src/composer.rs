//! Instruction assembly and syllabus decoding.

use lcommon::CourseContext;
use serde_json::Value;

use crate::persona;

const GENERAL_TOPICS: &str = "General topics";

/// Builds the full system instruction for one course: context clause,
/// persona clause, rules clause, in that fixed order.
///
/// Pure over its input; callers resend the result on every turn.
pub fn compose_system_instruction(course: &CourseContext) -> String {
    format!(
        "CONTEXT: Course \"{title}\". SYLLABUS: [{topics}]. ROLE: {role} \
         RULES: Multiple choice with {{{{A|B}}}}, math with $$...$$, \
         code requests with {{{{CODE_REQUEST}}}}.",
        title = course.title,
        topics = syllabus_topics(course.syllabus.as_deref()),
        role = persona(course.category),
    )
}

/// Decodes the stored syllabus into a comma-joined topic list.
///
/// The stored value may be a JSON array of topics, arbitrary free text, or
/// absent. A JSON array joins its elements in order; anything that fails to
/// decode as an array degrades to the raw string; an absent or blank value
/// degrades to a generic phrase. Never fails.
pub fn syllabus_topics(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return GENERAL_TOPICS.to_string();
    };

    if raw.trim().is_empty() {
        return GENERAL_TOPICS.to_string();
    }

    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(", "),
        _ => raw.to_string(),
    }
}

/// Prompt sent when asking the model to draft a syllabus for a course.
pub fn syllabus_request_prompt(course_title: &str) -> String {
    format!(
        "Generate a strict JSON array of 5 topics for \"{course_title}\". \
         Format: [\"Topic 1\", \"Topic 2\"]"
    )
}

/// Pulls the first JSON topic array out of free-form model output.
///
/// The model is asked for a bare array but tends to wrap it in prose or
/// code fences, so the scan spans from the first `[` to the last `]` and
/// decodes that slice. Returns `None` when no decodable array is present.
pub fn extract_topic_array(text: &str) -> Option<Vec<String>> {
    let start = text.find('[')?;
    let end = text.rfind(']')?;
    if end < start {
        return None;
    }

    match serde_json::from_str::<Value>(&text[start..=end]) {
        Ok(Value::Array(items)) => Some(
            items
                .iter()
                .map(|item| match item {
                    Value::String(topic) => topic.clone(),
                    other => other.to_string(),
                })
                .collect(),
        ),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use lcommon::{CourseCategory, CourseContext};

    use super::*;

    #[test]
    fn clauses_appear_in_fixed_order() {
        let course = CourseContext::new("Calculus I", CourseCategory::Math)
            .with_syllabus(r#"["limits","derivatives"]"#);
        let instruction = compose_system_instruction(&course);

        let context_at = instruction.find("CONTEXT:").expect("context clause");
        let role_at = instruction.find("ROLE:").expect("role clause");
        let rules_at = instruction.find("RULES:").expect("rules clause");
        assert!(context_at < role_at);
        assert!(role_at < rules_at);
    }

    #[test]
    fn rules_clause_restates_all_three_grammars() {
        let course = CourseContext::new("Anything", CourseCategory::Other);
        let instruction = compose_system_instruction(&course);

        assert!(instruction.contains("{{A|B}}"));
        assert!(instruction.contains("$$...$$"));
        assert!(instruction.contains("{{CODE_REQUEST}}"));
    }

    #[test]
    fn json_array_syllabus_joins_topics_in_order() {
        assert_eq!(
            syllabus_topics(Some(r#"["for-loops","while-loops"]"#)),
            "for-loops, while-loops"
        );
    }

    #[test]
    fn non_array_json_degrades_to_raw_string() {
        assert_eq!(
            syllabus_topics(Some(r#"{"week1":"intro"}"#)),
            r#"{"week1":"intro"}"#
        );
    }

    #[test]
    fn malformed_json_degrades_to_raw_string() {
        assert_eq!(syllabus_topics(Some("loops, recursion")), "loops, recursion");
    }

    #[test]
    fn absent_or_blank_syllabus_degrades_to_general_topics() {
        assert_eq!(syllabus_topics(None), GENERAL_TOPICS);
        assert_eq!(syllabus_topics(Some("   ")), GENERAL_TOPICS);
    }

    #[test]
    fn non_string_array_items_are_stringified() {
        assert_eq!(syllabus_topics(Some("[1, 2, 3]")), "1, 2, 3");
    }

    #[test]
    fn syllabus_request_names_the_course() {
        let prompt = syllabus_request_prompt("Intro to Loops");
        assert!(prompt.contains("\"Intro to Loops\""));
        assert!(prompt.contains("JSON array"));
    }

    #[test]
    fn topic_array_is_extracted_from_surrounding_prose() {
        let text = "Sure, here you go:\n[\"Variables\", \"Loops\", \"Functions\"]\nEnjoy!";
        assert_eq!(
            extract_topic_array(text),
            Some(vec![
                "Variables".to_string(),
                "Loops".to_string(),
                "Functions".to_string(),
            ])
        );
    }

    #[test]
    fn topic_array_survives_code_fences() {
        let text = "```json\n[\"A\", \"B\"]\n```";
        assert_eq!(
            extract_topic_array(text),
            Some(vec!["A".to_string(), "B".to_string()])
        );
    }

    #[test]
    fn non_string_topics_are_stringified() {
        assert_eq!(
            extract_topic_array("[1, 2]"),
            Some(vec!["1".to_string(), "2".to_string()])
        );
    }

    #[test]
    fn missing_or_undecodable_arrays_yield_none() {
        assert_eq!(extract_topic_array("no brackets here"), None);
        assert_eq!(extract_topic_array("mismatched ] before ["), None);
        assert_eq!(extract_topic_array("[\"first\"] and [\"second\"]"), None);
        assert_eq!(extract_topic_array("[not json at all]"), None);
    }

    #[test]
    fn composition_is_deterministic() {
        let course = CourseContext::new("Poetry", CourseCategory::Letters);
        assert_eq!(
            compose_system_instruction(&course),
            compose_system_instruction(&course)
        );
    }
}
