use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Abstract, chart-type-agnostic dataset as delivered by the data-fetch layer.
///
/// `labels` and `datasets` are optional here so that a payload missing them can be
/// reported as malformed input by the resolver instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartDataset {
    /// Some producers encode the id as a number, others as a string.
    /// Accept both and normalize to `String`.
    #[serde(default, deserialize_with = "de_opt_string_from_string_or_number")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub layout: Option<String>,
    #[serde(default)]
    pub labels: Option<Vec<String>>,
    #[serde(default)]
    pub datasets: Option<Vec<Series>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datasets2: Option<SecondaryGroup>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numeric_format: Option<String>,
}

impl ChartDataset {
    /// Convenience constructor for the common case (labels + primary series).
    pub fn new(labels: Vec<String>, datasets: Vec<Series>) -> Self {
        Self {
            labels: Some(labels),
            datasets: Some(datasets),
            ..Self::default()
        }
    }

    pub fn with_secondary(mut self, group: SecondaryGroup) -> Self {
        self.datasets2 = Some(group);
        self
    }

    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = Some(colors.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_numeric_format(mut self, locale: impl Into<String>) -> Self {
        self.numeric_format = Some(locale.into());
        self
    }

    /// Secondary series as a slice, empty when `datasets2` is absent.
    pub fn secondary(&self) -> &[Series] {
        match &self.datasets2 {
            Some(group) => group.as_slice(),
            None => &[],
        }
    }
}

/// `datasets2` is either one series object or an ordered array of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SecondaryGroup {
    Many(Vec<Series>),
    One(Series),
}

impl SecondaryGroup {
    pub fn as_slice(&self) -> &[Series] {
        match self {
            SecondaryGroup::Many(v) => v,
            SecondaryGroup::One(s) => std::slice::from_ref(s),
        }
    }

    /// First series of the group (the only one for `One`).
    pub fn first(&self) -> Option<&Series> {
        self.as_slice().first()
    }
}

/// A named ordered sequence of values or keyed `{x, y}` pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub label: String,
    #[serde(default)]
    pub data: Vec<DataValue>,
}

impl Series {
    pub fn new(label: impl Into<String>, data: Vec<DataValue>) -> Self {
        Self {
            label: label.into(),
            data,
        }
    }

    /// Series of plain numbers.
    pub fn numbers(label: impl Into<String>, values: &[f64]) -> Self {
        Self::new(label, values.iter().map(|v| DataValue::from(*v)).collect())
    }

    /// `x` to `y` lookup over the keyed entries. The first entry for a repeated `x` wins;
    /// plain entries are not indexed.
    pub fn category_index(&self) -> AHashMap<&str, &Scalar> {
        let mut by_x = AHashMap::with_capacity(self.data.len());
        for d in &self.data {
            if let DataValue::Pair { x, y } = d {
                by_x.entry(x.as_str()).or_insert(y);
            }
        }
        by_x
    }

    pub fn has_pairs(&self) -> bool {
        self.data.iter().any(|d| matches!(d, DataValue::Pair { .. }))
    }
}

/// One data entry: a keyed pair or a bare scalar. Mixing both in one series is allowed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DataValue {
    Pair { x: String, y: Scalar },
    Scalar(Scalar),
}

impl DataValue {
    pub fn pair(x: impl Into<String>, y: f64) -> Self {
        DataValue::Pair {
            x: x.into(),
            y: Scalar::Number(y),
        }
    }

    /// The value part, regardless of shape.
    pub fn value(&self) -> &Scalar {
        match self {
            DataValue::Pair { y, .. } => y,
            DataValue::Scalar(s) => s,
        }
    }
}

impl From<f64> for DataValue {
    fn from(v: f64) -> Self {
        DataValue::Scalar(Scalar::Number(v))
    }
}

/// A single value as it arrived: a number, a string, or `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(f64),
    Text(String),
    Missing,
}

impl Scalar {
    /// Numeric view of the value; numeric strings coerce, everything else is `None`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Number(v) => Some(*v),
            Scalar::Text(s) => s.trim().parse::<f64>().ok(),
            Scalar::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Scalar::Missing)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Number(v)
    }
}

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scalar::Number(v) => write!(f, "{v}"),
            Scalar::Text(s) => f.write_str(s),
            Scalar::Missing => Ok(()),
        }
    }
}

/// Serde helper: parse an optional id from either a JSON number or a string.
fn de_opt_string_from_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    struct IdVisitor;

    impl<'de> Visitor<'de> for IdVisitor {
        type Value = Option<String>;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            write!(f, "a string or number identifying the dataset")
        }

        fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(v.to_string()))
        }

        fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(v.to_string()))
        }

        fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(s.to_string()))
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }
    }

    deserializer.deserialize_any(IdVisitor)
}
