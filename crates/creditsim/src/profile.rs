use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one of the six scored attributes of a financial profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProfileField {
    Income,
    Emi,
    CreditUsage,
    MissedPayments,
    CreditHistoryAge,
    ActiveLoans,
}

impl ProfileField {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Income,
            Self::Emi,
            Self::CreditUsage,
            Self::MissedPayments,
            Self::CreditHistoryAge,
            Self::ActiveLoans,
        ]
    }

    /// Wire name used by the JSON contract.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Emi => "emi",
            Self::CreditUsage => "creditUsage",
            Self::MissedPayments => "missedPayments",
            Self::CreditHistoryAge => "creditHistoryAge",
            Self::ActiveLoans => "activeLoans",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Income => "Monthly Income",
            Self::Emi => "Monthly EMI",
            Self::CreditUsage => "Credit Utilization",
            Self::MissedPayments => "Missed Payments",
            Self::CreditHistoryAge => "Credit History Age",
            Self::ActiveLoans => "Active Loans",
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Complete set of inputs required by the score engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialProfile {
    pub income: f64,
    pub emi: f64,
    pub credit_usage: f64,
    pub missed_payments: u32,
    pub credit_history_age: u32,
    pub active_loans: u32,
}

impl Default for FinancialProfile {
    fn default() -> Self {
        Self {
            income: 50_000.0,
            emi: 15_000.0,
            credit_usage: 30.0,
            missed_payments: 0,
            credit_history_age: 24,
            active_loans: 2,
        }
    }
}

impl FinancialProfile {
    /// Checks every field against its domain. Counts are unsigned by
    /// construction, so only the floating-point fields need inspection.
    pub fn validate(&self) -> Result<(), ProfileError> {
        check_finite(ProfileField::Income, self.income)?;
        if self.income <= 0.0 {
            return Err(ProfileError::NonPositiveIncome(self.income));
        }

        check_finite(ProfileField::Emi, self.emi)?;
        check_non_negative(ProfileField::Emi, self.emi)?;

        check_finite(ProfileField::CreditUsage, self.credit_usage)?;
        check_non_negative(ProfileField::CreditUsage, self.credit_usage)?;
        if self.credit_usage > MAX_CREDIT_USAGE {
            return Err(ProfileError::OutOfRange {
                field: ProfileField::CreditUsage,
                value: self.credit_usage,
                max: MAX_CREDIT_USAGE,
            });
        }

        Ok(())
    }

    /// Field-wise overwrite with whatever the partial profile recognized.
    pub fn merge(&mut self, partial: &PartialProfile) {
        if let Some(income) = partial.income {
            self.income = income;
        }
        if let Some(emi) = partial.emi {
            self.emi = emi;
        }
        if let Some(usage) = partial.credit_usage {
            self.credit_usage = usage;
        }
        if let Some(missed) = partial.missed_payments {
            self.missed_payments = missed;
        }
        if let Some(months) = partial.credit_history_age {
            self.credit_history_age = months;
        }
        if let Some(loans) = partial.active_loans {
            self.active_loans = loans;
        }
    }

    pub fn merged(mut self, partial: &PartialProfile) -> Self {
        self.merge(partial);
        self
    }

    /// Debt-to-income ratio. Only meaningful once `validate` has passed.
    pub fn emi_ratio(&self) -> f64 {
        self.emi / self.income
    }
}

pub const MAX_CREDIT_USAGE: f64 = 100.0;

/// Fields recognized from free text. A `None` means "not found", never zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub income: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emi: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_usage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missed_payments: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_history_age: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_loans: Option<u32>,
}

impl PartialProfile {
    pub fn is_empty(&self) -> bool {
        self.recognized().is_empty()
    }

    /// Recognized fields in canonical order.
    pub fn recognized(&self) -> Vec<ProfileField> {
        ProfileField::ordered()
            .into_iter()
            .filter(|field| self.contains(*field))
            .collect()
    }

    pub fn contains(&self, field: ProfileField) -> bool {
        match field {
            ProfileField::Income => self.income.is_some(),
            ProfileField::Emi => self.emi.is_some(),
            ProfileField::CreditUsage => self.credit_usage.is_some(),
            ProfileField::MissedPayments => self.missed_payments.is_some(),
            ProfileField::CreditHistoryAge => self.credit_history_age.is_some(),
            ProfileField::ActiveLoans => self.active_loans.is_some(),
        }
    }
}

/// Untrusted wire shape of a profile. Every field is an arbitrary JSON number
/// so that missing or negative values reach validation instead of failing
/// deserialization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSubmission {
    #[serde(default)]
    pub income: Option<f64>,
    #[serde(default)]
    pub emi: Option<f64>,
    #[serde(default)]
    pub credit_usage: Option<f64>,
    #[serde(default)]
    pub missed_payments: Option<f64>,
    #[serde(default)]
    pub credit_history_age: Option<f64>,
    #[serde(default)]
    pub active_loans: Option<f64>,
}

impl From<FinancialProfile> for ProfileSubmission {
    fn from(profile: FinancialProfile) -> Self {
        Self {
            income: Some(profile.income),
            emi: Some(profile.emi),
            credit_usage: Some(profile.credit_usage),
            missed_payments: Some(f64::from(profile.missed_payments)),
            credit_history_age: Some(f64::from(profile.credit_history_age)),
            active_loans: Some(f64::from(profile.active_loans)),
        }
    }
}

impl TryFrom<ProfileSubmission> for FinancialProfile {
    type Error = ProfileError;

    fn try_from(submission: ProfileSubmission) -> Result<Self, Self::Error> {
        let profile = FinancialProfile {
            income: required(ProfileField::Income, submission.income)?,
            emi: required(ProfileField::Emi, submission.emi)?,
            credit_usage: required(ProfileField::CreditUsage, submission.credit_usage)?,
            missed_payments: whole_count(
                ProfileField::MissedPayments,
                required(ProfileField::MissedPayments, submission.missed_payments)?,
            )?,
            credit_history_age: whole_count(
                ProfileField::CreditHistoryAge,
                required(ProfileField::CreditHistoryAge, submission.credit_history_age)?,
            )?,
            active_loans: whole_count(
                ProfileField::ActiveLoans,
                required(ProfileField::ActiveLoans, submission.active_loans)?,
            )?,
        };

        profile.validate()?;
        Ok(profile)
    }
}

/// Raised when a profile cannot be scored.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProfileError {
    #[error("invalid profile: {0} is required")]
    MissingField(ProfileField),
    #[error("invalid profile: income must be greater than zero (got {0})")]
    NonPositiveIncome(f64),
    #[error("invalid profile: {field} must not be negative (got {value})")]
    Negative { field: ProfileField, value: f64 },
    #[error("invalid profile: {0} must be a finite number")]
    NotFinite(ProfileField),
    #[error("invalid profile: {field} must be a whole number (got {value})")]
    NotWholeNumber { field: ProfileField, value: f64 },
    #[error("invalid profile: {field} must be at most {max} (got {value})")]
    OutOfRange {
        field: ProfileField,
        value: f64,
        max: f64,
    },
}

fn required(field: ProfileField, value: Option<f64>) -> Result<f64, ProfileError> {
    value.ok_or(ProfileError::MissingField(field))
}

fn check_finite(field: ProfileField, value: f64) -> Result<(), ProfileError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ProfileError::NotFinite(field))
    }
}

fn check_non_negative(field: ProfileField, value: f64) -> Result<(), ProfileError> {
    if value < 0.0 {
        Err(ProfileError::Negative { field, value })
    } else {
        Ok(())
    }
}

fn whole_count(field: ProfileField, value: f64) -> Result<u32, ProfileError> {
    check_finite(field, value)?;
    check_non_negative(field, value)?;
    if value.fract() != 0.0 {
        return Err(ProfileError::NotWholeNumber { field, value });
    }
    if value > f64::from(u32::MAX) {
        return Err(ProfileError::OutOfRange {
            field,
            value,
            max: f64::from(u32::MAX),
        });
    }
    Ok(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission() -> ProfileSubmission {
        ProfileSubmission::from(FinancialProfile::default())
    }

    #[test]
    fn submission_converts_when_complete() {
        let profile = FinancialProfile::try_from(submission()).expect("valid profile");
        assert_eq!(profile, FinancialProfile::default());
    }

    #[test]
    fn submission_rejects_missing_fields() {
        let mut raw = submission();
        raw.credit_history_age = None;

        let error = FinancialProfile::try_from(raw).expect_err("missing field");
        assert_eq!(
            error,
            ProfileError::MissingField(ProfileField::CreditHistoryAge)
        );
        assert!(error.to_string().contains("creditHistoryAge"));
    }

    #[test]
    fn submission_rejects_negative_counts() {
        let mut raw = submission();
        raw.missed_payments = Some(-1.0);

        match FinancialProfile::try_from(raw) {
            Err(ProfileError::Negative { field, value }) => {
                assert_eq!(field, ProfileField::MissedPayments);
                assert_eq!(value, -1.0);
            }
            other => panic!("expected negative rejection, got {other:?}"),
        }
    }

    #[test]
    fn submission_rejects_fractional_counts() {
        let mut raw = submission();
        raw.active_loans = Some(1.5);

        assert!(matches!(
            FinancialProfile::try_from(raw),
            Err(ProfileError::NotWholeNumber {
                field: ProfileField::ActiveLoans,
                ..
            })
        ));
    }

    #[test]
    fn validate_rejects_zero_income_and_excess_usage() {
        let mut profile = FinancialProfile::default();
        profile.income = 0.0;
        assert_eq!(
            profile.validate(),
            Err(ProfileError::NonPositiveIncome(0.0))
        );

        let mut profile = FinancialProfile::default();
        profile.credit_usage = 120.0;
        assert!(matches!(
            profile.validate(),
            Err(ProfileError::OutOfRange {
                field: ProfileField::CreditUsage,
                ..
            })
        ));

        let mut profile = FinancialProfile::default();
        profile.emi = f64::NAN;
        assert_eq!(
            profile.validate(),
            Err(ProfileError::NotFinite(ProfileField::Emi))
        );
    }

    #[test]
    fn merging_empty_partial_is_identity() {
        let profile = FinancialProfile::default();
        let merged = profile.merged(&PartialProfile::default());
        assert_eq!(merged, profile);
    }

    #[test]
    fn merge_overwrites_only_recognized_fields() {
        let partial = PartialProfile {
            income: Some(75_000.0),
            missed_payments: Some(2),
            ..PartialProfile::default()
        };

        let merged = FinancialProfile::default().merged(&partial);
        assert_eq!(merged.income, 75_000.0);
        assert_eq!(merged.missed_payments, 2);
        assert_eq!(merged.emi, FinancialProfile::default().emi);
        assert_eq!(
            partial.recognized(),
            vec![ProfileField::Income, ProfileField::MissedPayments]
        );
    }

    #[test]
    fn partial_profile_omits_absent_keys_on_the_wire() {
        let partial = PartialProfile {
            credit_usage: Some(25.0),
            credit_history_age: Some(60),
            ..PartialProfile::default()
        };

        let json = serde_json::to_value(partial).expect("serializes");
        assert_eq!(
            json,
            serde_json::json!({ "creditUsage": 25.0, "creditHistoryAge": 60 })
        );
    }
}
