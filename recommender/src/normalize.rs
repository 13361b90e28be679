//! Profile text construction.
//!
//! The student profile is flattened into one sentence-like string and then
//! normalized, so punctuation and casing differences do not move the
//! embedding.

use std::sync::LazyLock;

use regex_lite::Regex;

use crate::model::StudentProfile;

#[allow(clippy::expect_used)]
static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9\s]").expect("valid pattern"));

#[allow(clippy::expect_used)]
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid pattern"));

/// Lower-case `text`, turn everything but ASCII letters, digits and
/// whitespace into spaces, collapse whitespace runs and trim.
///
/// The output only holds `[a-z0-9 ]`, never starts or ends with a space and
/// is a fixed point: normalizing it again returns it unchanged.
pub fn normalize_text(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = NON_ALPHANUMERIC.replace_all(&lowered, " ");
    let collapsed = WHITESPACE_RUN.replace_all(&stripped, " ");
    collapsed.trim().to_string()
}

/// Render a profile as the normalized text that gets embedded.
///
/// Fragments are emitted in a fixed order (skills, education, projects,
/// licenses; each list in stored order) and joined with `". "` before
/// normalization. Missing sub-fields render as empty strings.
pub fn profile_to_text(profile: &StudentProfile) -> String {
    let mut fragments = Vec::with_capacity(
        1 + profile.education.len() + profile.projects.len() + profile.licenses.len(),
    );

    fragments.push(format!("Skills: {}", profile.skills.join(", ")));

    for edu in &profile.education {
        fragments.push(format!(
            "{} in {} from {}",
            or_empty(&edu.degree),
            or_empty(&edu.field),
            or_empty(&edu.school),
        ));
    }

    for project in &profile.projects {
        fragments.push(format!(
            "{} {}",
            or_empty(&project.name),
            or_empty(&project.description),
        ));
    }

    for license in &profile.licenses {
        fragments.push(format!(
            "{} {}",
            or_empty(&license.name),
            or_empty(&license.organization),
        ));
    }

    normalize_text(&fragments.join(". "))
}

fn or_empty(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Education, License, Project};
    use pretty_assertions::assert_eq;

    fn is_normalized(s: &str) -> bool {
        s.chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == ' ')
            && !s.starts_with(' ')
            && !s.ends_with(' ')
            && !s.contains("  ")
    }

    #[test]
    fn test_normalize_text_basic() {
        assert_eq!(
            normalize_text("  Rust, C++ & Go!\n\tSenior-Dev  "),
            "rust c go senior dev"
        );
        assert_eq!(normalize_text(""), "");
        assert_eq!(normalize_text("!!!"), "");
    }

    #[test]
    fn test_normalize_text_replaces_non_ascii() {
        assert_eq!(normalize_text("Café Résumé"), "caf r sum");
        assert_eq!(normalize_text("a\u{00a0}b\u{3000}c"), "a b c");
        assert_eq!(normalize_text("数据 Python"), "python");
    }

    #[test]
    fn test_normalize_text_is_idempotent() {
        let samples = [
            "Skills: Python, SQL. BSc in CS from X",
            "  MIXED case\t\twith   runs  ",
            "émoji 🚀 and symbols #$%^",
            "",
            "already normalized text 123",
        ];

        for sample in samples {
            let once = normalize_text(sample);
            assert!(is_normalized(&once), "not normalized: {once:?}");
            assert_eq!(normalize_text(&once), once);
        }
    }

    #[test]
    fn test_profile_to_text_reference_case() {
        let profile = StudentProfile {
            id: "S1".to_string(),
            skills: vec!["Python".to_string(), "SQL".to_string()],
            education: vec![Education {
                degree: Some("BSc".to_string()),
                field: Some("CS".to_string()),
                school: Some("X".to_string()),
            }],
            ..Default::default()
        };

        assert_eq!(
            profile_to_text(&profile),
            normalize_text("Skills: Python, SQL. BSc in CS from X")
        );
        assert_eq!(profile_to_text(&profile), "skills python sql bsc in cs from x");
    }

    #[test]
    fn test_empty_profile_yields_skills_label() {
        assert_eq!(profile_to_text(&StudentProfile::default()), "skills");
    }

    #[test]
    fn test_missing_fields_keep_template_words() {
        let profile = StudentProfile {
            education: vec![Education::default()],
            projects: vec![Project {
                name: Some("Compiler".to_string()),
                description: None,
            }],
            ..Default::default()
        };

        assert_eq!(profile_to_text(&profile), "skills in from compiler");
    }

    #[test]
    fn test_group_order_is_fixed() {
        let profile = StudentProfile {
            skills: vec!["alpha".to_string()],
            education: vec![Education {
                degree: Some("beta".to_string()),
                ..Default::default()
            }],
            projects: vec![
                Project {
                    name: Some("gamma".to_string()),
                    description: Some("one".to_string()),
                },
                Project {
                    name: Some("delta".to_string()),
                    description: Some("two".to_string()),
                },
            ],
            licenses: vec![License {
                name: Some("epsilon".to_string()),
                organization: Some("Org".to_string()),
            }],
            ..Default::default()
        };

        assert_eq!(
            profile_to_text(&profile),
            "skills alpha beta in from gamma one delta two epsilon org"
        );

        let mut reordered = profile.clone();
        reordered.projects.reverse();
        assert_eq!(
            profile_to_text(&reordered),
            "skills alpha beta in from delta two gamma one epsilon org"
        );
    }
}
