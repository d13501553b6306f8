use crate::profile::FinancialProfile;
use crate::scoring::{RuleTable, ScoreEngine};

pub(super) fn engine() -> ScoreEngine {
    ScoreEngine::new(RuleTable::standard())
}

pub(super) fn profile() -> FinancialProfile {
    FinancialProfile::default()
}

pub(super) fn strongest_profile() -> FinancialProfile {
    FinancialProfile {
        income: 100_000.0,
        emi: 0.0,
        credit_usage: 5.0,
        missed_payments: 0,
        credit_history_age: 240,
        active_loans: 3,
    }
}

pub(super) fn weakest_profile() -> FinancialProfile {
    FinancialProfile {
        income: 10_000.0,
        emi: 9_000.0,
        credit_usage: 100.0,
        missed_payments: 12,
        credit_history_age: 0,
        active_loans: 0,
    }
}
