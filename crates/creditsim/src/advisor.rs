//! Boundary of the conversational advisor.
//!
//! The advisor forwards a profile summary to an external language model and
//! relays its prose reply. Only the parts that must agree across every caller
//! live here: the credit-topic gate and the brief it forwards.

use crate::profile::FinancialProfile;
use crate::scoring::ScoreResult;
use serde::Serialize;
use std::fmt::Write as _;
use std::sync::OnceLock;

pub const OFF_TOPIC_REPLY: &str = "I'm here to help only with credit score and related financial topics. Please ask something related to your credit profile.";

pub const ADVISOR_SYSTEM_PROMPT: &str = "You are a helpful AI credit advisor.";

const CREDIT_KEYWORDS: &[&str] = &[
    "credit score",
    "loan",
    "emi",
    "credit usage",
    "missed payments",
    "best strategy",
    "income",
    "cibil",
    "credit report",
    "debt",
    "repayment",
    "financial profile",
    "fico",
    "credit card",
    "credit limit",
    "payment history",
    "late fees",
    "credit bureau",
    "account age",
    "credit inquiry",
    "hard inquiry",
    "soft inquiry",
    "secured loan",
    "unsecured loan",
    "creditworthiness",
    "loan default",
    "credit monitoring",
    "how can i improve my credit score?",
    "what factors are hurting my score?",
    "what if i pay off my loans early?",
    "how long will it take to reach 800?",
];

/// Shared keyword list deciding whether a message is about credit.
#[derive(Debug)]
pub struct CreditTopicGate {
    keywords: Vec<String>,
}

static CREDIT_TOPIC_GATE: OnceLock<CreditTopicGate> = OnceLock::new();

impl CreditTopicGate {
    /// The single gate instance every collaborator consults.
    pub fn shared() -> &'static Self {
        CREDIT_TOPIC_GATE.get_or_init(|| Self::with_keywords(CREDIT_KEYWORDS.iter().copied()))
    }

    pub fn with_keywords<'a>(keywords: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            keywords: keywords
                .into_iter()
                .map(|keyword| keyword.to_lowercase())
                .collect(),
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn is_credit_related(&self, message: &str) -> bool {
        let message = message.to_lowercase();
        self.keywords
            .iter()
            .any(|keyword| message.contains(keyword.as_str()))
    }
}

/// Outcome of screening an advisor message.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AdvisorScreening {
    Declined { reply: &'static str },
    Forwarded { brief: AdvisorBrief },
}

/// Prompt material handed to the advisor's language model.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisorBrief {
    pub system_prompt: &'static str,
    pub user_prompt: String,
}

impl AdvisorBrief {
    pub fn render(profile: &FinancialProfile, score: &ScoreResult, message: &str) -> Self {
        let mut prompt = String::new();
        prompt.push_str(
            "You are a financial advisor AI helping a user understand and improve their credit score.\n",
        );
        prompt.push_str("Here is the user's profile:\n");
        writeln!(prompt, "- Credit Score: {}", score.score).expect("write score");
        writeln!(prompt, "- Income: \u{20b9}{}", profile.income).expect("write income");
        writeln!(prompt, "- EMI: \u{20b9}{}", profile.emi).expect("write emi");
        writeln!(prompt, "- Credit Usage: {}%", profile.credit_usage).expect("write usage");
        writeln!(prompt, "- Missed Payments: {}", profile.missed_payments)
            .expect("write missed payments");
        writeln!(
            prompt,
            "- Credit History Age: {} months",
            profile.credit_history_age
        )
        .expect("write history");
        writeln!(prompt, "- Active Loans: {}", profile.active_loans).expect("write loans");
        write!(prompt, "\nUser asked: \"{}\"", message.trim()).expect("write question");

        Self {
            system_prompt: ADVISOR_SYSTEM_PROMPT,
            user_prompt: prompt,
        }
    }
}

/// Gate a message and, when it is on topic, prepare the brief.
pub fn screen(
    gate: &CreditTopicGate,
    profile: &FinancialProfile,
    score: &ScoreResult,
    message: &str,
) -> AdvisorScreening {
    if gate.is_credit_related(message) {
        AdvisorScreening::Forwarded {
            brief: AdvisorBrief::render(profile, score, message),
        }
    } else {
        tracing::debug!("advisor message declined as off-topic");
        AdvisorScreening::Declined {
            reply: OFF_TOPIC_REPLY,
        }
    }
}
