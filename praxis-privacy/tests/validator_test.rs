use praxis_core::models::{Category, Severity, ValidationScope};
use praxis_core::traits::{IRedactor, IValidator};
use praxis_privacy::{AnonymizationValidator, RedactionEngine};

// ── Reduced check ─────────────────────────────────────────────────────────

#[test]
fn reduced_check_flags_name_and_email_but_not_phone() {
    let validator = AnonymizationValidator::new();
    let check = validator
        .validate_redaction("", test_fixtures::INTAKE_NOTE)
        .unwrap();

    assert!(!check.is_valid);
    assert_eq!(check.potential_issues.len(), 2, "{:?}", check.potential_issues);
    assert!(check
        .potential_issues
        .contains(&"Max Mustermann".to_string()));
    assert!(check
        .potential_issues
        .contains(&"max@example.com".to_string()));
    // Phone is outside the reduced scope: penalty 10 per match.
    assert_eq!(check.score, 80);
}

#[test]
fn reduced_check_ignores_date_only_text() {
    let validator = AnonymizationValidator::new();
    let check = validator
        .validate_redaction("", test_fixtures::CONSULTATION_NOTE)
        .unwrap();

    assert!(check.is_valid);
    assert_eq!(check.score, 100);
    assert!(check.potential_issues.is_empty());
}

#[test]
fn reduced_check_does_not_flag_placeholders() {
    let engine = RedactionEngine::new();
    let validator = AnonymizationValidator::new();

    let text = "Max Mustermann, 10115 Berlin, max@beispiel.de";
    let redacted = engine.redact(text).unwrap();
    let check = validator.validate_redaction(text, &redacted.text).unwrap();

    assert!(check.is_valid, "leaks: {:?}", check.potential_issues);
    assert_eq!(check.score, 100);
}

// ── Full audit ────────────────────────────────────────────────────────────

#[test]
fn full_audit_finds_three_categories_with_score_55() {
    let validator = AnonymizationValidator::new();
    let audit = validator.validate_full(test_fixtures::INTAKE_NOTE).unwrap();

    assert!(!audit.is_anonymized);
    assert_eq!(audit.total_matches(), 3);
    assert_eq!(audit.confidence_score, 55);

    let categories: Vec<Category> = audit.findings.iter().map(|f| f.category).collect();
    assert_eq!(
        categories,
        vec![Category::Name, Category::Phone, Category::Email]
    );
}

#[test]
fn full_audit_severity_follows_category() {
    let validator = AnonymizationValidator::new();
    let audit = validator.validate_full(test_fixtures::INTAKE_NOTE).unwrap();

    for finding in &audit.findings {
        let expected = match finding.category {
            Category::Name | Category::Address | Category::Phone => Severity::High,
            _ => Severity::Medium,
        };
        assert_eq!(finding.severity, expected);
    }
}

#[test]
fn full_audit_sees_dates_the_reduced_check_ignores() {
    let validator = AnonymizationValidator::new();
    let audit = validator
        .validate_full(test_fixtures::CONSULTATION_NOTE)
        .unwrap();

    assert!(!audit.is_anonymized);
    assert_eq!(audit.confidence_score, 85);
    assert_eq!(audit.findings.len(), 1);
    assert_eq!(audit.findings[0].category, Category::Date);
    assert_eq!(audit.findings[0].severity, Severity::Medium);
}

#[test]
fn full_audit_clean_text_scores_100() {
    let validator = AnonymizationValidator::new();
    let audit = validator.validate_full(test_fixtures::CLEAN_NOTE).unwrap();

    assert!(audit.is_anonymized);
    assert_eq!(audit.confidence_score, 100);
    assert!(audit.findings.is_empty());
}

// ── Scope dispatch & scoring ──────────────────────────────────────────────

#[test]
fn validate_dispatches_on_scope_with_distinct_penalties() {
    let validator = AnonymizationValidator::new();

    let full = validator
        .validate(test_fixtures::INTAKE_NOTE, ValidationScope::Full)
        .unwrap();
    assert_eq!(full.scope, ValidationScope::Full);
    assert!(!full.is_clean);
    assert_eq!(full.score, 55);

    let reduced = validator
        .validate(test_fixtures::INTAKE_NOTE, ValidationScope::Reduced)
        .unwrap();
    assert_eq!(reduced.scope, ValidationScope::Reduced);
    assert!(!reduced.is_clean);
    assert_eq!(reduced.score, 80);
    assert!(reduced.leaked.contains(&"Max Mustermann".to_string()));
}

#[test]
fn score_is_monotone_in_leaked_matches() {
    let validator = AnonymizationValidator::new();

    let a = "Kontakt: max@beispiel.de";
    let b = "Kontakt: max@beispiel.de, otto@beispiel.org";

    let full_a = validator.validate_full(a).unwrap();
    let full_b = validator.validate_full(b).unwrap();
    assert!(full_b.confidence_score <= full_a.confidence_score);
    assert_eq!(full_a.confidence_score, 85);
    assert_eq!(full_b.confidence_score, 70);

    let red_a = validator.validate_redaction("", a).unwrap();
    let red_b = validator.validate_redaction("", b).unwrap();
    assert!(red_b.score <= red_a.score);
    assert_eq!(red_a.score, 90);
    assert_eq!(red_b.score, 80);
}

#[test]
fn score_floors_at_zero() {
    let validator = AnonymizationValidator::new();
    // 12 emails leak 12 matches: 100 - 15*12 would go negative.
    let text = (0..12)
        .map(|i| format!("nutzer{i}@beispiel.de"))
        .collect::<Vec<_>>()
        .join(" ");

    let audit = validator.validate_full(&text).unwrap();
    assert_eq!(audit.confidence_score, 0);

    let check = validator.validate_redaction("", &text).unwrap();
    assert_eq!(check.score, 0);
}
