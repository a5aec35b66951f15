use praxis_core::models::Category;
use praxis_core::traits::IRedactor;
use praxis_privacy::{patterns, RedactionEngine};

// ── Catalog health ────────────────────────────────────────────────────────

#[test]
fn all_catalog_rules_compile() {
    assert!(
        patterns::compile_failures().is_empty(),
        "Rules failed to compile: {:?}",
        patterns::compile_failures()
    );
    assert!(patterns::ensure_compiled().is_ok());
}

#[test]
fn catalog_order_matches_category_priority() {
    let order: Vec<Category> = patterns::catalog().map(|(c, _)| c).collect();
    assert_eq!(order, Category::ALL.to_vec());

    let total_rules: usize = patterns::catalog().map(|(_, rules)| rules.len()).sum();
    assert_eq!(total_rules, 14, "Expected 14 rules across 7 categories");
}

#[test]
fn only_email_matches_case_insensitively() {
    for (category, rules) in patterns::catalog() {
        for rule in rules {
            assert_eq!(
                rule.case_insensitive,
                category == Category::Email,
                "unexpected case flag on rule '{}'",
                rule.name
            );
        }
    }
}

#[test]
fn rule_accessor_exposes_the_compiled_regex() {
    for (_, rules) in patterns::catalog() {
        for rule in rules {
            let re: Option<&regex::Regex> = rule.regex();
            assert!(re.is_some(), "rule '{}' unavailable", rule.name);
        }
    }
}

#[test]
fn catalog_is_restartable() {
    let it = patterns::catalog();
    let first: Vec<Category> = it.clone().map(|(c, _)| c).collect();
    let second: Vec<Category> = it.map(|(c, _)| c).collect();
    assert_eq!(first, second);
}

// ── Per-category redaction ────────────────────────────────────────────────

#[test]
fn consultation_note_redacts_exactly_one_date() {
    let engine = RedactionEngine::new();
    let result = engine.redact(test_fixtures::CONSULTATION_NOTE).unwrap();

    assert_eq!(result.replacement_count(), 1, "ledger: {:?}", result.ledger);
    let entry = &result.ledger[0];
    assert_eq!(entry.category, Category::Date);
    assert_eq!(entry.original, "15.12.2023");
    assert_eq!(entry.placeholder, "[DATUM_1]");
    assert_eq!((entry.start, entry.end), (17, 27));
    assert!(result.text.contains("[DATUM_1]"));
    assert!(!result.text.contains("15.12.2023"));
}

#[test]
fn intake_note_redacts_name_phone_email() {
    let engine = RedactionEngine::new();
    let result = engine.redact(test_fixtures::INTAKE_NOTE).unwrap();

    let categories: Vec<Category> = result.ledger.iter().map(|m| m.category).collect();
    assert_eq!(
        categories,
        vec![Category::Name, Category::Phone, Category::Email]
    );
    assert!(result.text.contains("[NAME_1]"));
    assert!(result.text.contains("[TELEFON_1]"));
    assert!(result.text.contains("[EMAIL_1]"));
    assert!(!result.text.contains("Max Mustermann"));
    assert!(!result.text.contains("030-12345678"));
    assert!(!result.text.contains("max@example.com"));
}

#[test]
fn intake_note_ledger_offsets_refer_to_original_text() {
    let engine = RedactionEngine::new();
    let result = engine.redact(test_fixtures::INTAKE_NOTE).unwrap();

    for entry in &result.ledger {
        assert_eq!(
            &test_fixtures::INTAKE_NOTE[entry.start..entry.end],
            entry.original,
            "offsets of {:?} do not point at the original literal",
            entry.placeholder
        );
    }
}

#[test]
fn titled_name_is_redacted() {
    let engine = RedactionEngine::new();
    let result = engine.redact(test_fixtures::REFERRAL_NOTE).unwrap();

    assert!(result.text.contains("[NAME_1]"), "text: {}", result.text);
    assert!(result.text.contains("[DATUM_1]"));
    assert!(!result.text.contains("Dr. Müller"));
    assert!(!result.text.contains("3.4.2021"));
}

#[test]
fn hyphenated_surname_is_redacted() {
    let engine = RedactionEngine::new();
    let result = engine.redact("Befund für Müller-Schmidt liegt vor.").unwrap();

    assert!(result.text.contains("[NAME_1]"), "text: {}", result.text);
    assert!(!result.text.contains("Müller-Schmidt"));
}

#[test]
fn both_address_rules_fire_with_per_category_numbering() {
    let engine = RedactionEngine::new();
    let result = engine.redact(test_fixtures::HOME_VISIT_NOTE).unwrap();

    let addresses: Vec<&str> = result
        .ledger
        .iter()
        .filter(|m| m.category == Category::Address)
        .map(|m| m.placeholder.as_str())
        .collect();
    assert_eq!(addresses, vec!["[ADRESSE_1]", "[ADRESSE_2]"]);
    assert!(!result.text.contains("Lindenallee"));
    assert!(!result.text.contains("10115 Berlin"));
}

#[test]
fn insurance_number_is_redacted_not_mistaken_for_passport() {
    let engine = RedactionEngine::new();
    let result = engine.redact(test_fixtures::INSURANCE_NOTE).unwrap();

    assert_eq!(result.replacement_count(), 1, "ledger: {:?}", result.ledger);
    assert_eq!(result.ledger[0].category, Category::InsuranceId);
    assert!(result.text.contains("[VERSICHERUNG_1]"));
}

#[test]
fn personalausweis_number_is_redacted() {
    let engine = RedactionEngine::new();
    let result = engine.redact("Ausweisnummer: 12 34 56 78 L 123").unwrap();

    assert_eq!(result.ledger[0].category, Category::GovernmentId);
    assert!(result.text.contains("[ID_1]"));
}

#[test]
fn country_code_phone_is_redacted() {
    let engine = RedactionEngine::new();
    let result = engine.redact("Rückruf unter +49 30 901820 erbeten.").unwrap();

    assert_eq!(result.replacement_count(), 1, "ledger: {:?}", result.ledger);
    assert_eq!(result.ledger[0].category, Category::Phone);
    assert_eq!(result.ledger[0].original, "+49 30 901820");
    assert!(result.text.contains("[TELEFON_1]"));
    assert!(!result.text.contains("+49"));
}

#[test]
fn passport_number_is_redacted() {
    let engine = RedactionEngine::new();
    let result = engine.redact("Reisepassnummer C01234567 hinterlegt.").unwrap();

    assert_eq!(result.replacement_count(), 1, "ledger: {:?}", result.ledger);
    assert_eq!(result.ledger[0].category, Category::GovernmentId);
    assert_eq!(result.ledger[0].original, "C01234567");
    assert!(result.text.contains("[ID_1]"));
}

#[test]
fn grouped_insurance_layout_is_redacted() {
    let rule = patterns::INSURANCE_ID_RULES
        .iter()
        .find(|r| r.name == "insurance_grouped")
        .unwrap();
    assert!(rule.regex().unwrap().is_match("98 765432 K 210"));

    // The Personalausweis rule also covers this layout and scans first,
    // so the redactor attributes the span to GovernmentId.
    let engine = RedactionEngine::new();
    let result = engine
        .redact("Versichertennummer 98 765432 K 210 erfasst.")
        .unwrap();
    assert_eq!(result.replacement_count(), 1, "ledger: {:?}", result.ledger);
    assert_eq!(result.ledger[0].category, Category::GovernmentId);
    assert_eq!(result.ledger[0].original, "98 765432 K 210");
    assert!(!result.text.contains("765432"));
}

#[test]
fn textual_date_is_redacted() {
    let engine = RedactionEngine::new();
    let result = engine.redact("Aufnahme am 3 März 2021 erfolgt.").unwrap();

    assert_eq!(result.ledger[0].category, Category::Date);
    assert!(result.text.contains("[DATUM_1]"));
}

// ── Ledger invariants ─────────────────────────────────────────────────────

#[test]
fn ledger_follows_catalog_order_then_left_to_right() {
    let engine = RedactionEngine::new();
    let text = "Max Mustermann wohnt in 10115 Berlin, erreichbar unter max@beispiel.de";
    let result = engine.redact(text).unwrap();

    let categories: Vec<Category> = result.ledger.iter().map(|m| m.category).collect();
    assert_eq!(
        categories,
        vec![Category::Name, Category::Address, Category::Email]
    );
}

#[test]
fn repeated_literal_consumes_successive_occurrences() {
    let engine = RedactionEngine::new();
    let text = "Kontrolle am 1.2.2023, Wiedervorlage am 1.2.2023.";
    let result = engine.redact(text).unwrap();

    assert_eq!(result.replacement_count(), 2);
    assert_eq!(result.ledger[0].placeholder, "[DATUM_1]");
    assert_eq!(result.ledger[1].placeholder, "[DATUM_2]");
    assert_eq!(result.ledger[0].original, result.ledger[1].original);
    assert!(
        result.ledger[0].start < result.ledger[1].start,
        "second match must resolve to the later occurrence"
    );
    assert!(result.text.contains("[DATUM_1]"));
    assert!(result.text.contains("[DATUM_2]"));
    assert!(!result.text.contains("1.2.2023"));
}

#[test]
fn every_identifying_note_yields_replacements() {
    let engine = RedactionEngine::new();
    for note in test_fixtures::identifying_notes() {
        let result = engine.redact(note).unwrap();
        assert!(!result.ledger.is_empty(), "no matches in: {note}");
    }
}

#[test]
fn zero_matches_is_success_with_empty_ledger() {
    let engine = RedactionEngine::new();

    let result = engine.redact(test_fixtures::CLEAN_NOTE).unwrap();
    assert!(result.ledger.is_empty());
    assert_eq!(result.text, test_fixtures::CLEAN_NOTE);

    let empty = engine.redact("").unwrap();
    assert!(empty.ledger.is_empty());
    assert_eq!(empty.text, "");
}

// ── Serialization & hashing ───────────────────────────────────────────────

#[test]
fn redacted_text_serializes_with_snake_case_categories() {
    let engine = RedactionEngine::new();
    let result = engine.redact(test_fixtures::CONSULTATION_NOTE).unwrap();

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["ledger"][0]["category"], "date");
    assert_eq!(json["ledger"][0]["placeholder"], "[DATUM_1]");
}

#[test]
fn content_hash_is_stable_hex() {
    let a = RedactionEngine::content_hash("Befund");
    let b = RedactionEngine::content_hash("Befund");
    assert_eq!(a, b);
    assert_eq!(a.len(), 64);
    assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
}
