//! Integration scenarios for the text → profile → score pipeline.

use creditsim::{compute, extract, parse_amount, FinancialProfile, PartialProfile, ProfileField};

#[test]
fn extraction_recognizes_only_mentioned_fields() {
    let parsed = extract("I earn ₹75,000 monthly with ₹20,000 EMI and 2 missed payments");

    assert_eq!(
        parsed.recognized(),
        vec![
            ProfileField::Income,
            ProfileField::Emi,
            ProfileField::MissedPayments
        ]
    );
    assert_eq!(parsed.income, Some(75_000.0));
    assert_eq!(parsed.emi, Some(20_000.0));
    assert_eq!(parsed.missed_payments, Some(2));
}

#[test]
fn extraction_converts_history_years_to_months() {
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
fn amount_normalization_examples() {
    assert_eq!(parse_amount("50k"), 50_000.0);
    assert_eq!(parse_amount("2 lakh"), 200_000.0);
    assert_eq!(parse_amount("1,50,000"), 150_000.0);
}

#[test]
fn successive_descriptions_merge_into_one_profile() {
    let mut profile = FinancialProfile::default();

    profile.merge(&extract("My salary is Rs. 1.2 lakh"));
    profile.merge(&extract("I have 3 active loans and never missed a payment"));
    profile.merge(&extract("The weather is lovely today"));

    assert_eq!(profile.income, 120_000.0);
    assert_eq!(profile.active_loans, 3);
    assert_eq!(profile.missed_payments, 0);
    assert_eq!(profile.emi, FinancialProfile::default().emi);

    // 250 + 110 + 18 + 60 + 40
    assert_eq!(compute(&profile).expect("scores").score, 778);
}

#[test]
fn merging_nothing_changes_nothing() {
    let profile = FinancialProfile::default();
    assert_eq!(profile.merged(&PartialProfile::default()), profile);
}
