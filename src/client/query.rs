//! Query string encoding for list endpoints.
//!
//! Parameters keep the order in which they are added. Absent values and
//! strings that are blank after trimming are left out of the rendered
//! query string. Values are written as is: callers pass tokens that are
//! already safe to put in a URL.

use std::fmt;

/// A single query parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    /// Text value
    Text(String),
    /// Integer value
    Number(i64),
}

impl QueryValue {
    fn is_blank(&self) -> bool {
        match self {
            QueryValue::Text(s) => s.trim().is_empty(),
            QueryValue::Number(_) => false,
        }
    }
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Text(s) => f.write_str(s),
            QueryValue::Number(n) => write!(f, "{}", n),
        }
    }
}

/// Conversion into an optional [`QueryValue`]; `None` means "absent".
pub trait IntoQueryValue {
    /// Perform the conversion.
    fn into_query_value(self) -> Option<QueryValue>;
}

impl IntoQueryValue for QueryValue {
    fn into_query_value(self) -> Option<QueryValue> {
        Some(self)
    }
}

impl IntoQueryValue for String {
    fn into_query_value(self) -> Option<QueryValue> {
        Some(QueryValue::Text(self))
    }
}

impl IntoQueryValue for &str {
    fn into_query_value(self) -> Option<QueryValue> {
        Some(QueryValue::Text(self.to_string()))
    }
}

impl IntoQueryValue for &String {
    fn into_query_value(self) -> Option<QueryValue> {
        Some(QueryValue::Text(self.clone()))
    }
}

macro_rules! impl_number {
    ($($ty:ty),*) => {
        $(
            impl IntoQueryValue for $ty {
                fn into_query_value(self) -> Option<QueryValue> {
                    Some(QueryValue::Number(self as i64))
                }
            }
        )*
    };
}

impl_number!(i32, i64, u32, u16, u8);

impl<T: IntoQueryValue> IntoQueryValue for Option<T> {
    fn into_query_value(self) -> Option<QueryValue> {
        self.and_then(IntoQueryValue::into_query_value)
    }
}

/// An ordered set of query parameters.
///
/// # Example
///
/// ```
/// use property_validation::client::QueryParams;
///
/// let query = QueryParams::new()
///     .param("projectId", "p1")
///     .param("$top", None::<u32>)
///     .param("filter", "");
/// assert_eq!(query.to_string(), "?projectId=p1");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, Option<QueryValue>)>,
}

impl QueryParams {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter. Absent and blank values are kept here but
    /// skipped when rendering.
    pub fn param(mut self, name: impl Into<String>, value: impl IntoQueryValue) -> Self {
        self.pairs.push((name.into(), value.into_query_value()));
        self
    }

    /// Append every parameter of `other` after the current ones.
    pub fn extend(mut self, other: QueryParams) -> Self {
        self.pairs.extend(other.pairs);
        self
    }

    /// Parameters that survive omission, in order.
    pub fn present(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.pairs.iter().filter_map(|(name, value)| match value {
            Some(v) if !v.is_blank() => Some((name.as_str(), v)),
            _ => None,
        })
    }

    /// Returns `true` if rendering would produce an empty string.
    pub fn is_empty(&self) -> bool {
        self.present().next().is_none()
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.present().enumerate() {
            let separator = if i == 0 { '?' } else { '&' };
            write!(f, "{}{}={}", separator, name, value)?;
        }
        Ok(())
    }
}

/// Types that describe the query part of a request URL.
pub trait ToQueryParams {
    /// Produce the ordered parameter list.
    fn to_query_params(&self) -> QueryParams;
}

impl<T: ToQueryParams> ToQueryParams for Option<T> {
    fn to_query_params(&self) -> QueryParams {
        self.as_ref()
            .map(ToQueryParams::to_query_params)
            .unwrap_or_default()
    }
}
