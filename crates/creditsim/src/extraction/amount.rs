use regex::Regex;
use std::sync::OnceLock;

const LAKH: f64 = 100_000.0;
const THOUSAND: f64 = 1_000.0;

static LEADING_NUMBER: OnceLock<Regex> = OnceLock::new();

fn leading_number() -> &'static Regex {
    LEADING_NUMBER.get_or_init(|| {
        Regex::new(r"(\d+(?:\.\d+)?)\s*([a-z]*)").expect("valid leading amount regex")
    })
}

/// Normalize an amount token such as `"50k"`, `"2 lakh"` or `"1,50,000"`.
/// Returns zero when the token holds no number at all.
pub fn parse_amount(token: &str) -> f64 {
    normalize_amount(token).unwrap_or(0.0)
}

/// Like [`parse_amount`], but reports a token without a usable number as
/// `None` so the extractor can leave the field unrecognized.
pub(crate) fn normalize_amount(token: &str) -> Option<f64> {
    let cleaned = token.replace(',', "").to_lowercase();
    let captures = leading_number().captures(&cleaned)?;
    let value: f64 = captures.get(1)?.as_str().parse().ok()?;
    let unit = captures.get(2).map_or("", |unit| unit.as_str());

    Some(value * unit_multiplier(unit)).filter(|amount| amount.is_finite())
}

fn unit_multiplier(unit: &str) -> f64 {
    match unit {
        "l" | "lakh" | "lakhs" | "lac" | "lacs" => LAKH,
        "k" | "thousand" | "thousands" => THOUSAND,
        _ => 1.0,
    }
}
