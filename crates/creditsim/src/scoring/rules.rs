use crate::profile::FinancialProfile;
use serde::{Deserialize, Serialize};

/// The five factors contributing to a score, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorKind {
    PaymentHistory,
    CreditUtilization,
    CreditHistory,
    CreditMix,
    IncomeRatio,
}

impl FactorKind {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::PaymentHistory,
            Self::CreditUtilization,
            Self::CreditHistory,
            Self::CreditMix,
            Self::IncomeRatio,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::PaymentHistory => "Payment History",
            Self::CreditUtilization => "Credit Utilization",
            Self::CreditHistory => "Credit History Length",
            Self::CreditMix => "Credit Mix",
            Self::IncomeRatio => "Debt-to-Income Ratio",
        }
    }
}

/// Points contributed by a utilization tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TierPoints {
    Fixed(f64),
    /// `base - (usage - floor) * slope`
    Linear { base: f64, floor: f64, slope: f64 },
}

impl TierPoints {
    fn apply(self, usage: f64) -> f64 {
        match self {
            Self::Fixed(points) => points,
            Self::Linear { base, floor, slope } => base - (usage - floor) * slope,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UtilizationTier {
    /// Inclusive upper bound on utilization percent.
    pub max: f64,
    pub points: TierPoints,
    pub message: &'static str,
}

/// Inclusive range of active loans mapped to a fixed award.
#[derive(Debug, Clone, PartialEq)]
pub struct LoanBucket {
    pub min: u32,
    /// `None` leaves the bucket open-ended.
    pub max: Option<u32>,
    pub points: f64,
    pub message: &'static str,
}

impl LoanBucket {
    fn contains(&self, loans: u32) -> bool {
        loans >= self.min && self.max.map_or(true, |max| loans <= max)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RatioBand {
    /// Inclusive upper bound on `emi / income`; `None` catches the remainder.
    pub max: Option<f64>,
    pub points: f64,
    pub message: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryMessage {
    pub min_months: u32,
    pub message: &'static str,
}

/// A single tagged rule. Each variant carries its own tuning knobs and knows
/// how to turn the profile field(s) it reads into points and a message.
#[derive(Debug, Clone, PartialEq)]
pub enum FactorRule {
    PaymentHistory {
        weight: f64,
        penalty_per_missed: f64,
    },
    CreditUtilization {
        tiers: Vec<UtilizationTier>,
    },
    CreditHistory {
        cap: f64,
        points_per_month: f64,
        messages: Vec<HistoryMessage>,
    },
    CreditMix {
        buckets: Vec<LoanBucket>,
    },
    IncomeRatio {
        bands: Vec<RatioBand>,
    },
}

/// Result of evaluating one rule against a profile.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleOutcome {
    pub points: f64,
    pub message: String,
}

impl FactorRule {
    pub fn kind(&self) -> FactorKind {
        match self {
            Self::PaymentHistory { .. } => FactorKind::PaymentHistory,
            Self::CreditUtilization { .. } => FactorKind::CreditUtilization,
            Self::CreditHistory { .. } => FactorKind::CreditHistory,
            Self::CreditMix { .. } => FactorKind::CreditMix,
            Self::IncomeRatio { .. } => FactorKind::IncomeRatio,
        }
    }

    /// Highest number of points this rule can award.
    pub fn max_points(&self) -> f64 {
        match self {
            Self::PaymentHistory { weight, .. } => *weight,
            Self::CreditUtilization { tiers } => tiers
                .iter()
                .map(|tier| match tier.points {
                    TierPoints::Fixed(points) => points,
                    TierPoints::Linear { base, .. } => base,
                })
                .fold(0.0, f64::max),
            Self::CreditHistory { cap, .. } => *cap,
            Self::CreditMix { buckets } => buckets.iter().map(|b| b.points).fold(0.0, f64::max),
            Self::IncomeRatio { bands } => bands.iter().map(|b| b.points).fold(0.0, f64::max),
        }
    }

    pub fn evaluate(&self, profile: &FinancialProfile) -> RuleOutcome {
        match self {
            Self::PaymentHistory {
                weight,
                penalty_per_missed,
            } => {
                let missed = profile.missed_payments;
                RuleOutcome {
                    points: (weight - f64::from(missed) * penalty_per_missed).max(0.0),
                    message: payment_message(missed),
                }
            }
            Self::CreditUtilization { tiers } => {
                let usage = profile.credit_usage;
                match select_tier(tiers, usage) {
                    Some(tier) => RuleOutcome {
                        points: tier.points.apply(usage),
                        message: tier.message.to_string(),
                    },
                    None => RuleOutcome {
                        points: 0.0,
                        message: format!("Credit utilization of {usage}% is outside the scored range"),
                    },
                }
            }
            Self::CreditHistory {
                cap,
                points_per_month,
                messages,
            } => {
                let months = profile.credit_history_age;
                let message = messages
                    .iter()
                    .find(|entry| months >= entry.min_months)
                    .map(|entry| entry.message)
                    .unwrap_or_default();
                RuleOutcome {
                    points: cap.min(f64::from(months) * points_per_month),
                    message: message.to_string(),
                }
            }
            Self::CreditMix { buckets } => {
                let loans = profile.active_loans;
                match buckets.iter().find(|bucket| bucket.contains(loans)) {
                    Some(bucket) => RuleOutcome {
                        points: bucket.points,
                        message: bucket.message.to_string(),
                    },
                    None => RuleOutcome {
                        points: 0.0,
                        message: format!("{loans} active loan(s) fall outside the scored buckets"),
                    },
                }
            }
            Self::IncomeRatio { bands } => {
                let ratio = profile.emi_ratio();
                match bands
                    .iter()
                    .find(|band| band.max.map_or(true, |max| ratio <= max))
                {
                    Some(band) => RuleOutcome {
                        points: band.points,
                        message: band.message.to_string(),
                    },
                    None => RuleOutcome {
                        points: 0.0,
                        message: format!("Debt-to-income ratio {ratio:.2} is outside the scored bands"),
                    },
                }
            }
        }
    }
}

/// First tier, in ascending bound order, whose bound covers `usage`.
pub(crate) fn select_tier(tiers: &[UtilizationTier], usage: f64) -> Option<&UtilizationTier> {
    tiers.iter().find(|tier| usage <= tier.max)
}

fn payment_message(missed: u32) -> String {
    match missed {
        0 => "Perfect payment history boosts your score significantly".to_string(),
        1..=2 => format!("{missed} missed payment(s) slightly impact your score"),
        _ => format!("{missed} missed payments significantly hurt your score"),
    }
}

/// Ordered rule list driving the score engine. Order decides the sequence of
/// factor messages; it never changes the numeric total.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleTable {
    rules: Vec<FactorRule>,
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl RuleTable {
    pub fn standard() -> Self {
        Self {
            rules: vec![
                FactorRule::PaymentHistory {
                    weight: 250.0,
                    penalty_per_missed: 40.0,
                },
                FactorRule::CreditUtilization {
                    tiers: vec![
                        UtilizationTier {
                            max: 10.0,
                            points: TierPoints::Fixed(180.0),
                            message: "Excellent credit utilization (\u{2264}10%) maximizes your score",
                        },
                        UtilizationTier {
                            max: 30.0,
                            points: TierPoints::Linear {
                                base: 150.0,
                                floor: 10.0,
                                slope: 2.0,
                            },
                            message: "Good credit utilization helps maintain a healthy score",
                        },
                        UtilizationTier {
                            max: 50.0,
                            points: TierPoints::Linear {
                                base: 110.0,
                                floor: 30.0,
                                slope: 1.5,
                            },
                            message: "High credit utilization is negatively impacting your score",
                        },
                        UtilizationTier {
                            max: 100.0,
                            points: TierPoints::Linear {
                                base: 80.0,
                                floor: 50.0,
                                slope: 1.0,
                            },
                            message: "Very high credit utilization significantly hurts your score",
                        },
                    ],
                },
                FactorRule::CreditHistory {
                    cap: 90.0,
                    points_per_month: 0.75,
                    messages: vec![
                        HistoryMessage {
                            min_months: 60,
                            message: "Long credit history strengthens your profile",
                        },
                        HistoryMessage {
                            min_months: 24,
                            message: "Moderate credit history age is beneficial",
                        },
                        HistoryMessage {
                            min_months: 0,
                            message: "Short credit history limits your score potential",
                        },
                    ],
                },
                FactorRule::CreditMix {
                    buckets: vec![
                        LoanBucket {
                            min: 2,
                            max: Some(4),
                            points: 60.0,
                            message: "Good credit mix with multiple account types",
                        },
                        LoanBucket {
                            min: 1,
                            max: Some(1),
                            points: 40.0,
                            message: "Limited credit mix - consider diversifying account types",
                        },
                        LoanBucket {
                            min: 0,
                            max: Some(0),
                            points: 20.0,
                            message: "No active loans - having some credit accounts can help",
                        },
                        LoanBucket {
                            min: 5,
                            max: None,
                            points: 30.0,
                            message: "Too many active loans may indicate credit dependency",
                        },
                    ],
                },
                FactorRule::IncomeRatio {
                    bands: vec![
                        RatioBand {
                            max: Some(0.3),
                            points: 40.0,
                            message: "Excellent debt-to-income ratio shows financial stability",
                        },
                        RatioBand {
                            max: Some(0.4),
                            points: 30.0,
                            message: "Good debt-to-income ratio",
                        },
                        RatioBand {
                            max: Some(0.5),
                            points: 20.0,
                            message: "High debt-to-income ratio may concern lenders",
                        },
                        RatioBand {
                            max: None,
                            points: 10.0,
                            message: "Very high debt-to-income ratio is a significant risk factor",
                        },
                    ],
                },
            ],
        }
    }

    pub fn rules(&self) -> &[FactorRule] {
        &self.rules
    }

    /// Replace the rule of the same kind, keeping evaluation order intact.
    pub fn with_rule(mut self, rule: FactorRule) -> Self {
        if let Some(slot) = self.rules.iter_mut().find(|slot| slot.kind() == rule.kind()) {
            *slot = rule;
        }
        self
    }

    /// Sum of every rule's best case.
    pub fn max_points(&self) -> f64 {
        self.rules.iter().map(FactorRule::max_points).sum()
    }
}
