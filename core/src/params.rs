//! Parameter bags passed to the request pipeline.
//!
//! # Design
//! ZAP parameters are a loose bag of optional keys. `Params` keeps them as
//! ordered `(name, Option<ParamValue>)` pairs so a wrapper can pass every
//! declared parameter through unconditionally and let [`Params::filtered`]
//! drop the absent ones. Only `None` counts as absent: `0`, `false` and the
//! empty string are all sent.

use std::fmt;

/// A single parameter value as it will appear on the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Str(s) => f.write_str(s),
            ParamValue::Int(n) => write!(f, "{n}"),
            ParamValue::Float(n) => write!(f, "{n}"),
            ParamValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// Conversion into an optional parameter value.
///
/// Implemented for the scalar types ZAP accepts and for `Option<T>` of any of
/// them, so wrappers can take required and optional arguments alike.
pub trait IntoParamValue {
    fn into_param_value(self) -> Option<ParamValue>;
}

impl IntoParamValue for ParamValue {
    fn into_param_value(self) -> Option<ParamValue> {
        Some(self)
    }
}

impl IntoParamValue for &str {
    fn into_param_value(self) -> Option<ParamValue> {
        Some(ParamValue::Str(self.to_string()))
    }
}

impl IntoParamValue for String {
    fn into_param_value(self) -> Option<ParamValue> {
        Some(ParamValue::Str(self))
    }
}

impl IntoParamValue for &String {
    fn into_param_value(self) -> Option<ParamValue> {
        Some(ParamValue::Str(self.clone()))
    }
}

impl IntoParamValue for bool {
    fn into_param_value(self) -> Option<ParamValue> {
        Some(ParamValue::Bool(self))
    }
}

impl IntoParamValue for f64 {
    fn into_param_value(self) -> Option<ParamValue> {
        Some(ParamValue::Float(self))
    }
}

macro_rules! int_param_value {
    ($($ty:ty),*) => {
        $(
            impl IntoParamValue for $ty {
                fn into_param_value(self) -> Option<ParamValue> {
                    Some(ParamValue::Int(i64::from(self)))
                }
            }
        )*
    };
}

int_param_value!(i8, i16, i32, i64, u8, u16, u32);

impl<T: IntoParamValue> IntoParamValue for Option<T> {
    fn into_param_value(self) -> Option<ParamValue> {
        self.and_then(IntoParamValue::into_param_value)
    }
}

/// Ordered parameter bag for one endpoint call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    entries: Vec<(String, Option<ParamValue>)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Params::insert`].
    pub fn with(mut self, name: impl Into<String>, value: impl IntoParamValue) -> Self {
        self.insert(name, value);
        self
    }

    /// Set `name`, replacing any earlier entry with the same name in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl IntoParamValue) {
        let name = name.into();
        let value = value.into_param_value();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .and_then(|(_, v)| v.as_ref())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop absent entries and render the rest as wire strings, preserving
    /// declaration order.
    pub fn filtered(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .filter_map(|(k, v)| v.as_ref().map(|v| (k.clone(), v.to_string())))
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: IntoParamValue,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

/// Encode pairs as `application/x-www-form-urlencoded`, which is also the
/// query string encoding.
pub(crate) fn encode_pairs(pairs: &[(String, String)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(list: &[(&str, &str)]) -> Vec<(String, String)> {
        list.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn absent_values_are_dropped() {
        let params = Params::new()
            .with("a", None::<&str>)
            .with("b", "x")
            .with("c", None::<u32>);
        assert_eq!(params.filtered(), pairs(&[("b", "x")]));
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn falsy_values_are_preserved() {
        let params = Params::new()
            .with("zero", 0)
            .with("zeroStr", "0")
            .with("no", false)
            .with("empty", "");
        assert_eq!(
            params.filtered(),
            pairs(&[("zero", "0"), ("zeroStr", "0"), ("no", "false"), ("empty", "")])
        );
    }

    #[test]
    fn empty_string_is_sent_but_none_is_not() {
        let preserved = Params::new().with("session", Some(""));
        assert_eq!(preserved.filtered(), pairs(&[("session", "")]));

        let filtered = Params::new().with("session", None::<&str>);
        assert!(filtered.filtered().is_empty());
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut params = Params::new().with("a", 1).with("b", 2);
        params.insert("a", "one");
        assert_eq!(params.filtered(), pairs(&[("a", "one"), ("b", "2")]));
        assert_eq!(params.get("a"), Some(&ParamValue::Str("one".to_string())));
    }

    #[test]
    fn collects_from_iterator() {
        let params: Params = vec![("contextName", Some("c1")), ("regex", None)]
            .into_iter()
            .collect();
        assert_eq!(params.filtered(), pairs(&[("contextName", "c1")]));
    }

    #[test]
    fn encoding_escapes_reserved_characters() {
        let encoded = encode_pairs(&pairs(&[("regex", "https://a.b/.*"), ("q", "a b&c")]));
        assert_eq!(encoded, "regex=https%3A%2F%2Fa.b%2F.*&q=a+b%26c");
    }

    #[test]
    fn scalar_values_render_like_zap_expects() {
        assert_eq!(ParamValue::Bool(true).to_string(), "true");
        assert_eq!(ParamValue::Int(-3).to_string(), "-3");
        assert_eq!(ParamValue::Float(1.5).to_string(), "1.5");
    }
}
