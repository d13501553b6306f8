//! Recovers profile fields from a free-text financial self-description.
//!
//! Every field has an ordered list of candidate patterns and the first one
//! that matches decides the value. Fields that no pattern recognizes are left
//! out of the result rather than defaulted.

mod amount;
mod patterns;

pub use amount::parse_amount;

use crate::profile::{PartialProfile, ProfileField, MAX_CREDIT_USAGE};
use amount::normalize_amount;
use patterns::{
    contains_any, first_capture, pattern_table, PatternTable, CLEAN_HISTORY_PHRASES,
    POOR_HISTORY_DEFAULT, POOR_HISTORY_PHRASES, YEAR_TOKENS,
};

/// Stateless extractor sharing the compiled pattern table.
#[derive(Clone, Copy)]
pub struct FieldExtractor {
    patterns: &'static PatternTable,
}

impl Default for FieldExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FieldExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldExtractor").finish_non_exhaustive()
    }
}

impl FieldExtractor {
    pub fn new() -> Self {
        Self {
            patterns: pattern_table(),
        }
    }

    pub fn extract(&self, text: &str) -> PartialProfile {
        let text = text.to_lowercase();

        let mut parsed = PartialProfile {
            income: self.amount(ProfileField::Income, &text),
            emi: self.amount(ProfileField::Emi, &text),
            credit_usage: self
                .integer(ProfileField::CreditUsage, &text)
                .map(f64::from)
                .filter(|usage| *usage <= MAX_CREDIT_USAGE),
            missed_payments: self.integer(ProfileField::MissedPayments, &text),
            credit_history_age: self
                .integer(ProfileField::CreditHistoryAge, &text)
                .and_then(|value| history_months(value, &text)),
            active_loans: self.integer(ProfileField::ActiveLoans, &text),
        };

        if parsed.missed_payments.is_none() {
            parsed.missed_payments = missed_payments_from_phrases(&text);
        }

        tracing::debug!(fields = ?parsed.recognized(), "extracted profile fields from text");
        parsed
    }

    fn amount(&self, field: ProfileField, text: &str) -> Option<f64> {
        first_capture(self.patterns.for_field(field), text).and_then(normalize_amount)
    }

    fn integer(&self, field: ProfileField, text: &str) -> Option<u32> {
        first_capture(self.patterns.for_field(field), text).and_then(|raw| raw.parse().ok())
    }
}

/// Extract with the shared pattern table.
pub fn extract(text: &str) -> PartialProfile {
    FieldExtractor::new().extract(text)
}

fn history_months(value: u32, text: &str) -> Option<u32> {
    if contains_any(text, YEAR_TOKENS) {
        value.checked_mul(12)
    } else {
        Some(value)
    }
}

fn missed_payments_from_phrases(text: &str) -> Option<u32> {
    if contains_any(text, POOR_HISTORY_PHRASES) {
        Some(POOR_HISTORY_DEFAULT)
    } else if contains_any(text, CLEAN_HISTORY_PHRASES) {
        Some(0)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_income_emi_and_missed_payments() {
        let parsed = extract("I earn ₹75,000 monthly with ₹20,000 EMI and 2 missed payments");

        assert_eq!(
            parsed,
            PartialProfile {
                income: Some(75_000.0),
                emi: Some(20_000.0),
                missed_payments: Some(2),
                ..PartialProfile::default()
            }
        );
    }

    #[test]
    fn extracts_history_in_years_and_utilization() {
        let parsed = extract("I have 5 years credit history with 25% utilization");

        assert_eq!(
            parsed,
            PartialProfile {
                credit_usage: Some(25.0),
                credit_history_age: Some(60),
                ..PartialProfile::default()
            }
        );
    }

    #[test]
    fn history_without_year_token_stays_in_months() {
        let parsed = extract("My credit history is 18 months old");
        assert_eq!(parsed.credit_history_age, Some(18));
    }

    #[test]
    fn year_token_anywhere_converts_history() {
        let parsed = extract("Opened my first card 3 yrs ago, 40 months history");
        assert_eq!(parsed.credit_history_age, Some(480));
    }

    #[test]
    fn income_accepts_currency_variants_and_units() {
        assert_eq!(extract("My salary is Rs. 50k").income, Some(50_000.0));
        assert_eq!(extract("I make rupees 2 lakh").income, Some(200_000.0));
        assert_eq!(extract("Rs 1,50,000 income").income, Some(150_000.0));
        assert_eq!(extract("60000 rupees monthly").income, Some(60_000.0));
    }

    #[test]
    fn first_matching_pattern_wins_for_multiple_numbers() {
        let parsed = extract("Income ₹40,000, bonus ₹90,000 monthly");
        assert_eq!(parsed.income, Some(40_000.0));
    }

    #[test]
    fn emi_keyword_before_amount() {
        let parsed = extract("My EMI is about Rs 12 thousand");
        assert_eq!(parsed.emi, Some(12_000.0));
        assert_eq!(parsed.income, None);
    }

    #[test]
    fn utilization_accepts_leading_keyword_and_using_phrase() {
        assert_eq!(extract("credit usage around 40%").credit_usage, Some(40.0));
        assert_eq!(extract("I am using 15% of my limit").credit_usage, Some(15.0));
    }

    #[test]
    fn implausible_utilization_is_unrecognized() {
        assert_eq!(extract("utilization is 250%").credit_usage, None);
    }

    #[test]
    fn missed_payment_variants() {
        assert_eq!(extract("missed 3 payments last year").missed_payments, Some(3));
        assert_eq!(extract("4 late payments").missed_payments, Some(4));
        assert_eq!(extract("1 delayed payment").missed_payments, Some(1));
    }

    #[test]
    fn clean_history_phrase_sets_zero() {
        assert_eq!(extract("I have never missed a bill").missed_payments, Some(0));
        assert_eq!(
            extract("I have a good payment history").missed_payments,
            Some(0)
        );
    }

    #[test]
    fn poor_history_phrase_defaults_to_five() {
        assert_eq!(
            extract("honestly a bad payment history").missed_payments,
            Some(5)
        );
    }

    #[test]
    fn explicit_number_beats_phrases() {
        let parsed = extract("bad payment history, 2 missed payments");
        assert_eq!(parsed.missed_payments, Some(2));
    }

    #[test]
    fn active_loan_phrasings() {
        assert_eq!(extract("I have 3 active loans").active_loans, Some(3));
        assert_eq!(extract("2 credit accounts open").active_loans, Some(2));
        assert_eq!(extract("just 1 loan").active_loans, Some(1));
    }

    #[test]
    fn unrelated_text_recognizes_nothing() {
        let parsed = extract("The weather is lovely today");
        assert!(parsed.is_empty());
    }

    #[test]
    fn overflowing_numbers_are_unrecognized() {
        let parsed = extract("99999999999 active loans");
        assert_eq!(parsed.active_loans, None);
    }

    #[test]
    fn overflowing_amounts_are_unrecognized() {
        let parsed = extract(&format!("I earn Rs {} monthly", "9".repeat(400)));
        assert_eq!(parsed.income, None);
        assert!(parsed.is_empty());

        let parsed = extract(&format!("My EMI is Rs {} lakh", "9".repeat(305)));
        assert_eq!(parsed.emi, None);
    }

    #[test]
    fn poor_history_phrase_wins_over_clean_phrase() {
        let parsed = extract("good payment history before, but now a bad payment history");
        assert_eq!(parsed.missed_payments, Some(POOR_HISTORY_DEFAULT));
    }
}
