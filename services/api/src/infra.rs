use chrono::NaiveDate;
use clap::Args;
use creditsim::config::AppConfig;
use creditsim::service::CreditSimService;
use creditsim::{FinancialProfile, ProfileError, ScoreEngine};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn build_service(config: &AppConfig) -> CreditSimService {
    CreditSimService::new(ScoreEngine::default(), config.simulation)
}

/// Profile fields accepted on the command line. Unset flags fall back to the
/// simulator's starting profile.
#[derive(Args, Debug, Clone)]
pub(crate) struct ProfileArgs {
    /// Monthly income in rupees
    #[arg(long, default_value_t = 50_000.0)]
    pub(crate) income: f64,
    /// Total monthly EMI in rupees
    #[arg(long, default_value_t = 15_000.0)]
    pub(crate) emi: f64,
    /// Credit utilization percentage (0-100)
    #[arg(long, default_value_t = 30.0)]
    pub(crate) credit_usage: f64,
    /// Number of missed payments
    #[arg(long, default_value_t = 0)]
    pub(crate) missed_payments: u32,
    /// Age of the oldest credit account in months
    #[arg(long, default_value_t = 24)]
    pub(crate) credit_history_age: u32,
    /// Number of active loans
    #[arg(long, default_value_t = 2)]
    pub(crate) active_loans: u32,
}

impl Default for ProfileArgs {
    fn default() -> Self {
        FinancialProfile::default().into()
    }
}

impl From<FinancialProfile> for ProfileArgs {
    fn from(profile: FinancialProfile) -> Self {
        Self {
            income: profile.income,
            emi: profile.emi,
            credit_usage: profile.credit_usage,
            missed_payments: profile.missed_payments,
            credit_history_age: profile.credit_history_age,
            active_loans: profile.active_loans,
        }
    }
}

impl TryFrom<ProfileArgs> for FinancialProfile {
    type Error = ProfileError;

    fn try_from(args: ProfileArgs) -> Result<Self, Self::Error> {
        let profile = FinancialProfile {
            income: args.income,
            emi: args.emi,
            credit_usage: args.credit_usage,
            missed_payments: args.missed_payments,
            credit_history_age: args.credit_history_age,
            active_loans: args.active_loans,
        };
        profile.validate()?;
        Ok(profile)
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_args_default_to_starting_profile() {
        let profile = FinancialProfile::try_from(ProfileArgs::default()).expect("valid profile");
        assert_eq!(profile, FinancialProfile::default());
    }

    #[test]
    fn profile_args_reject_zero_income() {
        let args = ProfileArgs {
            income: 0.0,
            ..ProfileArgs::default()
        };
        assert_eq!(
            FinancialProfile::try_from(args),
            Err(ProfileError::NonPositiveIncome(0.0))
        );
    }

    #[test]
    fn parse_date_accepts_iso_dates_only() {
        assert_eq!(
            parse_date(" 2025-09-24 "),
            Ok(NaiveDate::from_ymd_opt(2025, 9, 24).expect("valid date"))
        );
        assert!(parse_date("24/09/2025").is_err());
    }
}
