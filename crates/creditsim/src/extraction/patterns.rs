use crate::profile::ProfileField;
use regex::Regex;
use std::sync::OnceLock;

/// Currency marker: rupee sign, "Rs"/"Rs." or "rupee(s)".
const CURRENCY: &str = r"(?:₹|\brs\.?|\brupees?)";

/// Number with optional separators, decimals and a trailing unit word.
const AMOUNT: &str = r"(\d+(?:,\d+)*(?:\.\d+)?(?:\s*(?:k|thousands?|lakhs?|lacs?|l)\b)?)";

/// Phrases that settle `missedPayments` when no number was found.
pub(crate) const CLEAN_HISTORY_PHRASES: &[&str] = &["never missed", "good payment history"];
pub(crate) const POOR_HISTORY_PHRASES: &[&str] = &["bad payment history", "many missed"];
pub(crate) const POOR_HISTORY_DEFAULT: u32 = 5;

/// Tokens whose presence anywhere in the text marks history as years.
pub(crate) const YEAR_TOKENS: &[&str] = &["year", "yr"];

/// Candidate patterns per field, tried in priority order. Each pattern has
/// exactly one capture group holding the value.
pub(crate) struct PatternTable {
    pub(crate) income: Vec<Regex>,
    pub(crate) emi: Vec<Regex>,
    pub(crate) credit_usage: Vec<Regex>,
    pub(crate) missed_payments: Vec<Regex>,
    pub(crate) credit_history_age: Vec<Regex>,
    pub(crate) active_loans: Vec<Regex>,
}

impl PatternTable {
    pub(crate) fn for_field(&self, field: ProfileField) -> &[Regex] {
        match field {
            ProfileField::Income => &self.income,
            ProfileField::Emi => &self.emi,
            ProfileField::CreditUsage => &self.credit_usage,
            ProfileField::MissedPayments => &self.missed_payments,
            ProfileField::CreditHistoryAge => &self.credit_history_age,
            ProfileField::ActiveLoans => &self.active_loans,
        }
    }

    fn build() -> Self {
        Self {
            income: compile(
                "income",
                &[
                    format!(r"(?:earn|income|salary|make).*?{CURRENCY}\s*{AMOUNT}"),
                    format!(r"{CURRENCY}\s*{AMOUNT}\s*(?:income|salary|earn|monthly)"),
                    format!(r"{AMOUNT}\s*{CURRENCY}\s*(?:income|salary|monthly)"),
                ],
            ),
            emi: compile(
                "emi",
                &[
                    format!(r"\b(?:emi|installment).*?{CURRENCY}\s*{AMOUNT}"),
                    format!(r"{CURRENCY}\s*{AMOUNT}\s*(?:emi|installment)"),
                    format!(r"{AMOUNT}\s*{CURRENCY}\s*emi"),
                ],
            ),
            credit_usage: compile(
                "credit usage",
                &[
                    r"(?:credit\s+)?(?:utilization|usage|used).*?(\d+)\s*%".to_string(),
                    r"(\d+)\s*%\s*(?:credit\s+)?(?:utilization|usage|used)".to_string(),
                    r"(?:using|utilized?)\s*(\d+)\s*%".to_string(),
                ],
            ),
            missed_payments: compile(
                "missed payments",
                &[
                    r"(\d+)\s*missed\s*payments?".to_string(),
                    r"missed\s*(\d+)\s*payments?".to_string(),
                    r"(\d+)\s*(?:late|delayed)\s*payments?".to_string(),
                ],
            ),
            credit_history_age: compile(
                "credit history",
                &[
                    r"(\d+)\s*(?:years?|yrs?)\s*(?:credit\s*)?history".to_string(),
                    r"(?:credit\s*)?history.*?(\d+)\s*(?:years?|yrs?)".to_string(),
                    r"(\d+)\s*(?:months?|mos?)\s*(?:credit\s*)?history".to_string(),
                    r"(?:credit\s*)?history.*?(\d+)\s*(?:months?|mos?)".to_string(),
                ],
            ),
            active_loans: compile(
                "active loans",
                &[
                    r"(\d+)\s*(?:active\s*)?loans?".to_string(),
                    r"(\d+)\s*(?:loan|credit)\s*accounts?".to_string(),
                    r"(?:have|got)\s*(\d+)\s*loans?".to_string(),
                ],
            ),
        }
    }
}

fn compile(field: &str, sources: &[String]) -> Vec<Regex> {
    sources
        .iter()
        .map(|source| {
            Regex::new(&format!("(?i){source}"))
                .unwrap_or_else(|err| panic!("invalid {field} extraction pattern: {err}"))
        })
        .collect()
}

static PATTERN_TABLE: OnceLock<PatternTable> = OnceLock::new();

pub(crate) fn pattern_table() -> &'static PatternTable {
    PATTERN_TABLE.get_or_init(PatternTable::build)
}

/// Capture of the first pattern that matches, in priority order. Later
/// patterns are never consulted once one matches.
pub(crate) fn first_capture<'t>(patterns: &[Regex], text: &'t str) -> Option<&'t str> {
    patterns.iter().find_map(|pattern| {
        pattern
            .captures(text)
            .and_then(|captures| captures.get(1))
            .map(|value| value.as_str())
    })
}

pub(crate) fn contains_any(text: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|phrase| text.contains(phrase))
}
