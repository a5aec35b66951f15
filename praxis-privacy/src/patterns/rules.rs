use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

use super::CatalogRule;

macro_rules! catalog_regex {
    ($name:ident, $re:expr) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($re).ok());
    };
    ($name:ident, $re:expr, nocase) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| {
            RegexBuilder::new($re).case_insensitive(true).build().ok()
        });
    };
}

// ── Names ──────────────────────────────────────────────────────────────────
// Highest false-positive risk: any two adjacent capitalized words match.
// Known precision tradeoff. Repetitions are bounded; the engine is
// linear-time, so the bound caps span length, not matching cost.
catalog_regex!(
    RE_NAME_FIRST_LAST,
    r"\b[A-ZÄÖÜ][a-zäöüß]{1,30}\s+[A-ZÄÖÜ][a-zäöüß]{1,30}\b"
);
catalog_regex!(
    RE_NAME_TITLED,
    r"\b(?:Herr|Frau|Dr\.|Prof\.)\s+[A-ZÄÖÜ][a-zäöüß]{1,30}"
);
// Hyphen is mandatory: a bare single-capitalized-word rule would flag
// every sentence-initial noun in German text.
catalog_regex!(
    RE_NAME_HYPHENATED,
    r"\b[A-ZÄÖÜ][a-zäöüß]{1,30}-[A-ZÄÖÜ][a-zäöüß]{1,30}\b"
);

// ── Addresses ─────────────────────────────────────────────────────────────
// Two independent rules; they may double-match on the city portion.
catalog_regex!(
    RE_ADDRESS_STREET,
    r"\b\d{1,5}\s+[A-ZÄÖÜ][a-zäöüß\s]{1,40}(?:straße|str\.|platz|weg|allee|gasse)\b"
);
catalog_regex!(RE_ADDRESS_POSTAL_CITY, r"\b\d{5}\s+[A-ZÄÖÜ][a-zäöüß\s]{1,40}\b");

// ── Phone numbers (country-code or leading-zero national formats) ─────────
catalog_regex!(RE_PHONE_NATIONAL, r"(?:\+49|\b0)\s?\d{2,5}[\s\-]?\d{3,8}\b");
catalog_regex!(RE_PHONE_GROUPED, r"\b\d{3,5}[\s\-]\d{6,8}\b");

// ── Email ─────────────────────────────────────────────────────────────────
catalog_regex!(
    RE_EMAIL,
    r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b",
    nocase
);

// ── Government IDs ────────────────────────────────────────────────────────
catalog_regex!(
    RE_ID_PERSONALAUSWEIS,
    r"\b\d{2}\s?\d{2}\s?\d{2}\s?\d{2}\s?[A-Z]\s?\d{3}\b"
);
catalog_regex!(RE_ID_REISEPASS, r"\b[A-Z]\d{8}\b");

// ── Dates ─────────────────────────────────────────────────────────────────
catalog_regex!(RE_DATE_NUMERIC, r"\b\d{1,2}\.\d{1,2}\.\d{4}\b");
catalog_regex!(
    RE_DATE_TEXTUAL,
    r"\b\d{1,2}\s(?:Januar|Februar|März|April|Mai|Juni|Juli|August|September|Oktober|November|Dezember)\s\d{4}\b"
);

// ── Insurance numbers ─────────────────────────────────────────────────────
// Same layout family as government IDs; overlap is tolerated.
catalog_regex!(RE_INSURANCE_KVNR, r"\b[A-Z]\d{9}\b");
catalog_regex!(RE_INSURANCE_GROUPED, r"\b\d{2}\s?\d{6}\s?[A-Z]\s?\d{3}\b");

pub static NAME_RULES: [CatalogRule; 3] = [
    CatalogRule {
        name: "name_first_last",
        regex: &RE_NAME_FIRST_LAST,
        case_insensitive: false,
        reduced_audit: true,
        full_audit: true,
    },
    CatalogRule {
        name: "name_titled",
        regex: &RE_NAME_TITLED,
        case_insensitive: false,
        reduced_audit: false,
        full_audit: false,
    },
    CatalogRule {
        name: "name_hyphenated",
        regex: &RE_NAME_HYPHENATED,
        case_insensitive: false,
        reduced_audit: false,
        full_audit: false,
    },
];

pub static ADDRESS_RULES: [CatalogRule; 2] = [
    CatalogRule {
        name: "address_street",
        regex: &RE_ADDRESS_STREET,
        case_insensitive: false,
        reduced_audit: false,
        full_audit: true,
    },
    CatalogRule {
        name: "address_postal_city",
        regex: &RE_ADDRESS_POSTAL_CITY,
        case_insensitive: false,
        reduced_audit: true,
        full_audit: false,
    },
];

pub static PHONE_RULES: [CatalogRule; 2] = [
    CatalogRule {
        name: "phone_national",
        regex: &RE_PHONE_NATIONAL,
        case_insensitive: false,
        reduced_audit: false,
        full_audit: true,
    },
    CatalogRule {
        name: "phone_grouped",
        regex: &RE_PHONE_GROUPED,
        case_insensitive: false,
        reduced_audit: false,
        full_audit: false,
    },
];

pub static EMAIL_RULES: [CatalogRule; 1] = [CatalogRule {
    name: "email",
    regex: &RE_EMAIL,
    case_insensitive: true,
    reduced_audit: true,
    full_audit: true,
}];

pub static GOVERNMENT_ID_RULES: [CatalogRule; 2] = [
    CatalogRule {
        name: "id_personalausweis",
        regex: &RE_ID_PERSONALAUSWEIS,
        case_insensitive: false,
        reduced_audit: false,
        full_audit: true,
    },
    CatalogRule {
        name: "id_reisepass",
        regex: &RE_ID_REISEPASS,
        case_insensitive: false,
        reduced_audit: false,
        full_audit: false,
    },
];

pub static DATE_RULES: [CatalogRule; 2] = [
    CatalogRule {
        name: "date_numeric",
        regex: &RE_DATE_NUMERIC,
        case_insensitive: false,
        reduced_audit: false,
        full_audit: true,
    },
    CatalogRule {
        name: "date_textual",
        regex: &RE_DATE_TEXTUAL,
        case_insensitive: false,
        reduced_audit: false,
        full_audit: false,
    },
];

pub static INSURANCE_ID_RULES: [CatalogRule; 2] = [
    CatalogRule {
        name: "insurance_kvnr",
        regex: &RE_INSURANCE_KVNR,
        case_insensitive: false,
        reduced_audit: false,
        full_audit: true,
    },
    CatalogRule {
        name: "insurance_grouped",
        regex: &RE_INSURANCE_GROUPED,
        case_insensitive: false,
        reduced_audit: false,
        full_audit: false,
    },
];
