//! Two-stage label formatting shared by data labels, tooltips and axis ticks.
//!
//! Stage 1 (local) is chart-kind specific and decides *whether* and *what* to show.
//! Stage 2 (global) renders numbers with locale grouping and at most two decimals.
//! Anything stage 1 yields that is not a number passes through stage 2 unchanged.

use log::debug;
use num_format::{Locale, ToFormattedString};
use serde::Serialize;
use std::fmt;

use crate::models::Scalar;

/// Locale used when a dataset carries no `numeric_format`.
pub const DEFAULT_LOCALE: &str = "it-CH";

/// Map a locale tag (`it-CH`, `de_DE`, `en`, `german`, ...) to a `num_format::Locale`.
///
/// Tries the full tag first, then the language part alone. Unknown tags fall back to English.
pub fn resolve_locale(tag: &str) -> Locale {
    let normalized = tag.trim().replace('_', "-");
    let mut parts = normalized.split('-');
    let lang = parts.next().unwrap_or_default().to_ascii_lowercase();
    let rest: Vec<String> = parts
        .map(|p| {
            if p.len() == 2 {
                p.to_ascii_uppercase()
            } else {
                p.to_string()
            }
        })
        .collect();

    let alias = match lang.as_str() {
        "german" => "de",
        "us" => "en",
        other => other,
    };

    let mut full = alias.to_string();
    for p in &rest {
        full.push('-');
        full.push_str(p);
    }

    Locale::from_name(&full)
        .or_else(|_| Locale::from_name(alias))
        .unwrap_or(Locale::en)
}

/// Locale-aware numeric formatter (stage 2).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NumberFormat {
    pub locale: String,
    pub minimum_fraction_digits: u8,
    pub maximum_fraction_digits: u8,
    #[serde(skip)]
    resolved: Locale,
}

impl NumberFormat {
    pub fn new(locale: impl Into<String>) -> Self {
        let locale = locale.into();
        let resolved = resolve_locale(&locale);
        Self {
            locale,
            minimum_fraction_digits: 0,
            maximum_fraction_digits: 2,
            resolved,
        }
    }

    /// Format with grouped thousands and `minimum..=maximum` fraction digits.
    ///
    /// Rounds the exact binary value half away from zero, so `2.675` (stored as
    /// `2.67499...`) gives `2.67` while `0.125` gives `0.13`. Non-finite values and
    /// magnitudes beyond integer range are passed through as Rust renders them.
    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            debug!("number format: non-finite value {value} passed through");
            return value.to_string();
        }
        let max = usize::from(self.maximum_fraction_digits.min(20));
        let min = usize::from(self.minimum_fraction_digits.min(self.maximum_fraction_digits));

        let fixed = fixed_digits(value.abs(), max);
        let (int_digits, frac_digits) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
        let Ok(int_part) = int_digits.parse::<u128>() else {
            return value.to_string();
        };

        let locale = &self.resolved;
        let mut out = String::new();
        if value.is_sign_negative() && fixed.bytes().any(|b| matches!(b, b'1'..=b'9')) {
            out.push_str(locale.minus_sign());
        }
        out.push_str(&int_part.to_formatted_string(locale));

        let trimmed = frac_digits.trim_end_matches('0');
        let keep = trimmed.len().max(min).min(frac_digits.len());
        if keep > 0 {
            out.push_str(locale.decimal());
            out.push_str(&frac_digits[..keep]);
        }
        out
    }

    /// Stage 2: render whatever stage 1 produced.
    pub fn finish(&self, local: LocalLabel) -> Label {
        match local {
            LocalLabel::Number(v) => Label::Text(self.format(v)),
            LocalLabel::Numbers(vs) => Label::Lines(vs.into_iter().map(|v| self.format(v)).collect()),
            LocalLabel::Raw(s) => Label::Text(s),
            LocalLabel::Hidden => Label::Text(String::new()),
        }
    }
}

/// `value` (non-negative, finite) with exactly `digits` fraction digits.
///
/// `{:.N}` rounds the exact binary value but breaks exact ties to even; a value that
/// sits exactly halfway is nudged up one ulp first so ties round away from zero.
fn fixed_digits(value: f64, digits: usize) -> String {
    let v = if is_exact_tie(value, digits) {
        f64::from_bits(value.to_bits() + 1)
    } else {
        value
    };
    format!("{:.*}", digits, v)
}

/// True when `value * 10^digits` has a fractional part of exactly one half.
///
/// With `value = m * 2^e` and `m = odd * 2^t`, `2 * value * 10^digits` equals
/// `odd * 5^digits * 2^(t + e + 1 + digits)`, which is an odd integer iff the exponent is zero.
fn is_exact_tie(value: f64, digits: usize) -> bool {
    let bits = value.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i64;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exponent) = if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased - 1075)
    };
    mantissa != 0
        && i64::from(mantissa.trailing_zeros()) + exponent + 1 + digits as i64 == 0
}

/// Output of stage 1.
#[derive(Debug, Clone, PartialEq)]
pub enum LocalLabel {
    Number(f64),
    /// Multi-point label for bar-type charts.
    Numbers(Vec<f64>),
    /// A value that could not be read as a number; shown as-is.
    Raw(String),
    Hidden,
}

impl LocalLabel {
    /// Stage-1 reading of a single value. Numeric strings coerce, other strings stay raw.
    pub fn from_scalar(value: &Scalar) -> Self {
        match value {
            Scalar::Number(v) => LocalLabel::Number(*v),
            Scalar::Text(s) => match s.trim().parse::<f64>() {
                Ok(v) => LocalLabel::Number(v),
                Err(_) => {
                    debug!("label format: {s:?} is not numeric, passing through");
                    LocalLabel::Raw(s.clone())
                }
            },
            Scalar::Missing => LocalLabel::Hidden,
        }
    }
}

/// Final label text. `Lines` comes from multi-point labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Label {
    Text(String),
    Lines(Vec<String>),
}

impl Label {
    pub fn is_empty(&self) -> bool {
        match self {
            Label::Text(s) => s.is_empty(),
            Label::Lines(v) => v.iter().all(String::is_empty),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Text(s) => f.write_str(s),
            Label::Lines(v) => f.write_str(&v.join("\n")),
        }
    }
}

/// Stage-1 rule for one series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LocalRule {
    /// Show the value at every data point.
    Value,
    /// Show the value only at the last data point.
    LastPointOnly,
    Hidden,
}

impl LocalRule {
    pub fn apply(self, value: &Scalar, index: usize, len: usize) -> LocalLabel {
        match self {
            LocalRule::Value => LocalLabel::from_scalar(value),
            LocalRule::LastPointOnly if index + 1 == len => LocalLabel::from_scalar(value),
            LocalRule::LastPointOnly | LocalRule::Hidden => LocalLabel::Hidden,
        }
    }
}

/// One rule for every series, or one per series in series order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LocalRules {
    Uniform(LocalRule),
    PerSeries(Vec<LocalRule>),
}

impl LocalRules {
    pub fn rule_for(&self, series_index: usize) -> LocalRule {
        match self {
            LocalRules::Uniform(r) => *r,
            LocalRules::PerSeries(v) => v.get(series_index).copied().unwrap_or(LocalRule::Value),
        }
    }
}

/// Data-label formatter: a local rule composed with the numeric formatter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelFormatter {
    pub local: LocalRules,
    pub number: NumberFormat,
}

impl LabelFormatter {
    pub fn format(&self, series_index: usize, index: usize, len: usize, value: &Scalar) -> Label {
        let local = self.local.rule_for(series_index).apply(value, index, len);
        self.number.finish(local)
    }
}

/// Tooltip value formatter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TooltipFormat {
    /// Same locale-aware formatting as data labels.
    Number(NumberFormat),
    /// Fixed decimals followed by `%`, independent of the dataset locale.
    FixedPercent { decimals: u8 },
}

impl TooltipFormat {
    pub fn format(&self, value: &Scalar) -> String {
        match self {
            TooltipFormat::Number(nf) => nf.finish(LocalLabel::from_scalar(value)).to_string(),
            TooltipFormat::FixedPercent { decimals } => match value.as_f64() {
                Some(v) => format!("{:.*}%", *decimals as usize, v),
                None => value.to_string(),
            },
        }
    }
}
