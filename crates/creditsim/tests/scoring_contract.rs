//! Integration scenarios for the public scoring contract.
//!
//! Scenarios exercise the crate through its re-exported API only: profile
//! submissions in, `{ score, details }` out.

use creditsim::scoring::{FactorKind, ScoreEngine, MAX_SCORE, MIN_SCORE};
use creditsim::{compute, FinancialProfile, Grade, ProfileError, ProfileSubmission};

fn profiles() -> Vec<FinancialProfile> {
    let mut profiles = Vec::new();
    for missed in [0, 1, 2, 3, 6, 10] {
        for usage in [0.0, 10.0, 25.0, 30.0, 45.5, 50.0, 80.0, 100.0] {
            for months in [0, 12, 24, 60, 120, 400] {
                for loans in [0, 1, 3, 5, 9] {
                    for emi in [0.0, 12_000.0, 18_000.0, 24_000.0, 60_000.0] {
                        profiles.push(FinancialProfile {
                            income: 40_000.0,
                            emi,
                            credit_usage: usage,
                            missed_payments: missed,
                            credit_history_age: months,
                            active_loans: loans,
                        });
                    }
                }
            }
        }
    }
    profiles
}

#[test]
fn every_valid_profile_scores_within_bounds_with_five_factors() {
    let engine = ScoreEngine::default();

    for profile in profiles() {
        let breakdown = engine.breakdown(&profile).expect("valid profile scores");
        assert!(
            (MIN_SCORE..=MAX_SCORE).contains(&breakdown.score),
            "{profile:?} scored {}",
            breakdown.score
        );
        assert_eq!(breakdown.grade, Grade::from_score(breakdown.score));

        let kinds: Vec<FactorKind> = breakdown.components.iter().map(|c| c.factor).collect();
        assert_eq!(kinds, FactorKind::ordered());
        assert_eq!(breakdown.to_result().factors().len(), 5);
    }
}

#[test]
fn all_zero_submission_is_an_invalid_profile() {
    let submission = ProfileSubmission {
        income: Some(0.0),
        emi: Some(0.0),
        credit_usage: Some(0.0),
        missed_payments: Some(0.0),
        credit_history_age: Some(0.0),
        active_loans: Some(0.0),
    };

    let error = FinancialProfile::try_from(submission).expect_err("zero income rejected");
    assert_eq!(error, ProfileError::NonPositiveIncome(0.0));
}

#[test]
fn deserialized_contract_round_trips_through_engine() {
    let submission: ProfileSubmission = serde_json::from_str(
        r#"{"income":90000,"emi":50000,"creditUsage":55,"missedPayments":1,"creditHistoryAge":36,"activeLoans":6}"#,
    )
    .expect("valid json");
    let profile = FinancialProfile::try_from(submission).expect("valid profile");

    let result = compute(&profile).expect("scores");

    // 210 + 75 + 27 + 30 + 10
    assert_eq!(result.score, 652);
    assert_eq!(result.grade(), Grade::Good);
    assert_eq!(
        result.factors()[3],
        "Too many active loans may indicate credit dependency"
    );
    assert_eq!(
        result.factors()[4],
        "Very high debt-to-income ratio is a significant risk factor"
    );
}
