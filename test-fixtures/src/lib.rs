//! Shared German clinical sample texts for integration tests.

/// Consultation note whose only identifying content is a numeric date.
pub const CONSULTATION_NOTE: &str =
    "Konsultation vom 15.12.2023: Patient klagt über Kopfschmerzen.";

/// Intake line with a name, a phone number, and an email address.
pub const INTAKE_NOTE: &str = "Patient: Max Mustermann, Tel: 030-12345678, max@example.com";

/// Referral with a titled physician name and a numeric date.
pub const REFERRAL_NOTE: &str = "Überweisung durch Dr. Müller am 3.4.2021 wegen Rückenschmerzen.";

/// Home-visit note with a street address and a postal-code/city pair.
pub const HOME_VISIT_NOTE: &str = "Hausbesuch: 12 Lindenallee, 10115 Berlin, Tür im Hinterhof.";

/// Insurance correspondence with a Krankenversichertennummer.
pub const INSURANCE_NOTE: &str = "Versichertennummer A123456789, Erstattung bewilligt.";

/// Free text with no identifying content at all.
pub const CLEAN_NOTE: &str = "Befund unauffällig, Therapie wird fortgesetzt.";

/// Assorted notes that each contain at least one identifying fragment.
pub fn identifying_notes() -> Vec<&'static str> {
    vec![
        CONSULTATION_NOTE,
        INTAKE_NOTE,
        REFERRAL_NOTE,
        HOME_VISIT_NOTE,
        INSURANCE_NOTE,
    ]
}
