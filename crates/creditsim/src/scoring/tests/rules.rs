use super::common::*;
use crate::scoring::rules::select_tier;
use crate::scoring::{FactorRule, RuleTable, ScoreEngine, UtilizationTier};

fn utilization_tiers() -> Vec<UtilizationTier> {
    match &RuleTable::standard().rules()[1] {
        FactorRule::CreditUtilization { tiers } => tiers.clone(),
        other => panic!("expected utilization rule, got {other:?}"),
    }
}

#[test]
fn utilization_tier_scan_picks_first_covering_bound() {
    let tiers = utilization_tiers();

    assert_eq!(select_tier(&tiers, 0.0).map(|tier| tier.max), Some(10.0));
    assert_eq!(select_tier(&tiers, 10.0).map(|tier| tier.max), Some(10.0));
    assert_eq!(select_tier(&tiers, 10.5).map(|tier| tier.max), Some(30.0));
    assert_eq!(select_tier(&tiers, 50.0).map(|tier| tier.max), Some(50.0));
    assert_eq!(select_tier(&tiers, 100.0).map(|tier| tier.max), Some(100.0));
    assert!(select_tier(&tiers, 100.5).is_none());
}

#[test]
fn utilization_formulas_match_tier_definitions() {
    let rules = RuleTable::standard();
    let rule = &rules.rules()[1];

    let mut profile = profile();
    for (usage, expected) in [(5.0, 180.0), (20.0, 130.0), (40.0, 95.0), (75.0, 55.0)] {
        profile.credit_usage = usage;
        assert_eq!(rule.evaluate(&profile).points, expected, "usage {usage}");
    }
}

#[test]
fn utilization_message_avoids_encoding_artifacts() {
    let mut profile = profile();
    profile.credit_usage = 8.0;

    let outcome = RuleTable::standard().rules()[1].evaluate(&profile);
    assert_eq!(
        outcome.message,
        "Excellent credit utilization (\u{2264}10%) maximizes your score"
    );
}

#[test]
fn payment_history_messages_follow_missed_count() {
    let table = RuleTable::standard();
    let rule = &table.rules()[0];
    let mut profile = profile();

    profile.missed_payments = 1;
    let outcome = rule.evaluate(&profile);
    assert_eq!(outcome.points, 210.0);
    assert_eq!(outcome.message, "1 missed payment(s) slightly impact your score");

    profile.missed_payments = 7;
    let outcome = rule.evaluate(&profile);
    assert_eq!(outcome.points, 0.0);
    assert!(outcome.message.contains("significantly hurt"));
}

#[test]
fn credit_mix_buckets_cover_every_count() {
    let table = RuleTable::standard();
    let rule = &table.rules()[3];
    let mut profile = profile();

    let expectations = [(0, 20.0), (1, 40.0), (2, 60.0), (4, 60.0), (5, 30.0), (12, 30.0)];
    for (loans, points) in expectations {
        profile.active_loans = loans;
        assert_eq!(rule.evaluate(&profile).points, points, "loans {loans}");
    }
}

#[test]
fn income_ratio_bands_are_inclusive() {
    let table = RuleTable::standard();
    let rule = &table.rules()[4];
    let mut profile = profile();
    profile.income = 100.0;

    for (emi, points) in [(30.0, 40.0), (40.0, 30.0), (50.0, 20.0), (50.5, 10.0)] {
        profile.emi = emi;
        assert_eq!(rule.evaluate(&profile).points, points, "emi {emi}");
    }
}

#[test]
fn history_rule_caps_points() {
    let table = RuleTable::standard();
    let rule = &table.rules()[2];
    let mut profile = profile();

    profile.credit_history_age = 60;
    let outcome = rule.evaluate(&profile);
    assert_eq!(outcome.points, 45.0);
    assert_eq!(outcome.message, "Long credit history strengthens your profile");

    profile.credit_history_age = 500;
    assert_eq!(rule.evaluate(&profile).points, 90.0);
}

#[test]
fn standard_table_maximum_exceeds_score_ceiling() {
    assert_eq!(RuleTable::standard().max_points(), 620.0);
}

#[test]
fn tuned_rule_replaces_standard_rule_in_place() {
    let tuned = RuleTable::standard().with_rule(FactorRule::PaymentHistory {
        weight: 200.0,
        penalty_per_missed: 50.0,
    });
    let engine = ScoreEngine::new(tuned);

    let breakdown = engine.breakdown(&profile()).expect("scores");
    assert_eq!(breakdown.components[0].points, 200.0);
    assert_eq!(breakdown.components.len(), 5);
    assert_eq!(breakdown.score, 728);
}
