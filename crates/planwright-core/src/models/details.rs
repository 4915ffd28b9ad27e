//! Package details: target market, pricing, duration and marketing copy.

use std::{collections::BTreeSet, fmt, str::FromStr};

use serde::{
    de::{self, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};

/// Customer segments a package can be sold to.
///
/// Declaration order is the order used when a selection is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Market {
    #[serde(rename = "SME")]
    Sme,
    Startup,
    Enterprise,
    Government,
    Education,
    Individual,
}

impl Market {
    /// Every selectable market, in display order.
    pub const ALL: [Market; 6] = [
        Market::Sme,
        Market::Startup,
        Market::Enterprise,
        Market::Government,
        Market::Education,
        Market::Individual,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Market::Sme => "SME",
            Market::Startup => "Startup",
            Market::Enterprise => "Enterprise",
            Market::Government => "Government",
            Market::Education => "Education",
            Market::Individual => "Individual",
        }
    }
}

impl FromStr for Market {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Market::ALL
            .into_iter()
            .find(|market| market.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Invalid market: {s}"))
    }
}

/// Currency code for the package price.
///
/// The three codes the sales team works with are named; anything else is
/// kept as an upper-cased free-text code.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Currency {
    #[default]
    Myr,
    Sgd,
    Usd,
    Other(String),
}

impl Currency {
    pub fn code(&self) -> &str {
        match self {
            Currency::Myr => "MYR",
            Currency::Sgd => "SGD",
            Currency::Usd => "USD",
            Currency::Other(code) => code,
        }
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_uppercase();
        match code.as_str() {
            "" => Err("Currency code cannot be empty".to_string()),
            "MYR" => Ok(Currency::Myr),
            "SGD" => Ok(Currency::Sgd),
            "USD" => Ok(Currency::Usd),
            _ => Ok(Currency::Other(code)),
        }
    }
}

impl TryFrom<String> for Currency {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Currency> for String {
    fn from(value: Currency) -> Self {
        value.code().to_string()
    }
}

/// Unit of a plan duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    #[default]
    Day,
    Month,
    Year,
}

impl DurationUnit {
    /// Singular unit name.
    pub fn as_str(&self) -> &'static str {
        match self {
            DurationUnit::Day => "day",
            DurationUnit::Month => "month",
            DurationUnit::Year => "year",
        }
    }
}

impl FromStr for DurationUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "day" | "days" => Ok(DurationUnit::Day),
            "month" | "months" => Ok(DurationUnit::Month),
            "year" | "years" => Ok(DurationUnit::Year),
            _ => Err(format!("Invalid duration unit: {s}")),
        }
    }
}

/// A numeric form field as typed by the operator.
///
/// `Empty` means nothing has been entered yet, which is not the same as an
/// entered `0`. The raw text is kept so validation can report what was
/// actually typed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NumericInput {
    #[default]
    Empty,
    Entered(String),
}

impl NumericInput {
    pub fn is_empty(&self) -> bool {
        matches!(self, NumericInput::Empty)
    }

    /// The trimmed text, if anything was entered.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            NumericInput::Empty => None,
            NumericInput::Entered(text) => Some(text.as_str()),
        }
    }

    /// The entered value as a finite number.
    pub fn as_f64(&self) -> Option<f64> {
        self.as_text()
            .and_then(|text| text.parse::<f64>().ok())
            .filter(|value| value.is_finite())
    }

    /// The entered value as a non-negative whole number.
    ///
    /// `"30"` and `"30.0"` both yield 30; `"2.5"` and `"-1"` yield `None`.
    pub fn as_whole(&self) -> Option<u32> {
        self.as_f64()
            .filter(|value| *value >= 0.0 && value.fract() == 0.0 && *value <= f64::from(u32::MAX))
            .map(|value| value as u32)
    }

    /// Rewrite an entered number to its canonical text form.
    ///
    /// Unparseable text is left untouched so it keeps failing validation
    /// the same way.
    pub fn normalized(&self) -> Self {
        match self.as_f64() {
            Some(value) => NumericInput::Entered(value.to_string()),
            None => self.clone(),
        }
    }
}

impl From<&str> for NumericInput {
    fn from(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            NumericInput::Empty
        } else {
            NumericInput::Entered(trimmed.to_string())
        }
    }
}

impl From<String> for NumericInput {
    fn from(text: String) -> Self {
        NumericInput::from(text.as_str())
    }
}

impl From<u32> for NumericInput {
    fn from(value: u32) -> Self {
        NumericInput::Entered(value.to_string())
    }
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        NumericInput::Entered(value.to_string())
    }
}

impl Serialize for NumericInput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            NumericInput::Empty => serializer.serialize_none(),
            NumericInput::Entered(text) => serializer.serialize_str(text),
        }
    }
}

struct NumericInputVisitor;

impl<'de> Visitor<'de> for NumericInputVisitor {
    type Value = NumericInput;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number, a numeric string, or null")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(NumericInput::Empty)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(NumericInput::Empty)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(NumericInputVisitor)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(NumericInput::from(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(NumericInput::Entered(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(NumericInput::Entered(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(NumericInput::Entered(v.to_string()))
    }
}

impl<'de> Deserialize<'de> for NumericInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(NumericInputVisitor)
    }
}

/// How long a purchased package lasts.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlanDuration {
    #[serde(default)]
    pub magnitude: NumericInput,
    #[serde(default)]
    pub unit: DurationUnit,
}

impl PlanDuration {
    pub fn new(magnitude: u32, unit: DurationUnit) -> Self {
        Self {
            magnitude: NumericInput::from(magnitude),
            unit,
        }
    }
}

/// AI-suggested rewrites of the marketing copy.
///
/// These live next to the operator's originals and never replace them
/// unless the operator applies a suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Refinements {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benefits: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selling_points: Option<String>,
}

impl Refinements {
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.benefits.is_none() && self.selling_points.is_none()
    }

    /// Overlay `other` on top of `self`; fields absent in `other` are kept.
    pub fn merge(&mut self, other: Refinements) {
        if other.description.is_some() {
            self.description = other.description;
        }
        if other.benefits.is_some() {
            self.benefits = other.benefits;
        }
        if other.selling_points.is_some() {
            self.selling_points = other.selling_points;
        }
    }
}

/// Commercial details of a package.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageDetails {
    #[serde(default)]
    pub target_market: BTreeSet<Market>,
    #[serde(default)]
    pub price: NumericInput,
    #[serde(default)]
    pub currency: Currency,
    #[serde(default)]
    pub duration: PlanDuration,
    /// One benefit per line
    #[serde(default)]
    pub benefits: String,
    /// One selling point per line
    #[serde(default)]
    pub selling_points: String,
    #[serde(default, skip_serializing_if = "Refinements::is_empty")]
    pub refined: Refinements,
}

impl PackageDetails {
    pub fn benefit_items(&self) -> impl Iterator<Item = &str> {
        split_items(&self.benefits)
    }

    pub fn selling_point_items(&self) -> impl Iterator<Item = &str> {
        split_items(&self.selling_points)
    }
}

/// Split a newline-delimited list into trimmed, non-empty items.
pub fn split_items(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|line| !line.is_empty())
}
