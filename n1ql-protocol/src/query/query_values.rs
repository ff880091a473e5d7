use std::collections::HashMap;
use std::hash::Hash;

use serde_json::Value;

use crate::request::{RequestBody, Serialize};

/// Request body field carrying positional values.
pub const ARGS: &str = "args";

/// Renders the request body field name for a named value. The name may be
/// given with or without its `$` sigil; the output carries exactly one.
pub(crate) fn placeholder_field(name: &str) -> String {
    format!("${}", name.trim_start_matches('$'))
}

/// Positional and named values bound to a single statement.
///
/// Positional values fill the `args` array in the order they were given,
/// without reordering or deduplication. Named values each become a
/// top-level `$name` field. N1QL allows both kinds on one statement.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryValues {
    positional: Vec<Value>,
    named: HashMap<String, Value>,
}

impl QueryValues {
    pub fn new() -> Self {
        Default::default()
    }

    /// Appends a positional value.
    pub fn push_positional<V: Into<Value>>(&mut self, value: V) {
        self.positional.push(value.into());
    }

    /// Binds a named value, replacing any previous binding of the same name.
    pub fn insert_named<S: ToString, V: Into<Value>>(&mut self, name: S, value: V) {
        self.named
            .insert(placeholder_field(&name.to_string()), value.into());
    }

    /// Returns `true` if any named value is bound.
    #[inline]
    pub fn has_names(&self) -> bool {
        !self.named.is_empty()
    }

    /// Returns the number of bound values, positional and named together.
    pub fn len(&self) -> usize {
        self.positional.len() + self.named.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Positional values in binding order.
    pub fn positional(&self) -> &[Value] {
        &self.positional
    }

    /// Named values, keyed by their `$name` body field.
    pub fn named(&self) -> &HashMap<String, Value> {
        &self.named
    }
}

impl<T: Into<Value>> From<Vec<T>> for QueryValues {
    /// Converts a `Vec` into positional values.
    fn from(values: Vec<T>) -> QueryValues {
        QueryValues {
            positional: values.into_iter().map(Into::into).collect(),
            named: HashMap::new(),
        }
    }
}

impl<'a, T: Into<Value> + Clone> From<&'a [T]> for QueryValues {
    /// Converts a slice into positional values.
    fn from(values: &'a [T]) -> QueryValues {
        QueryValues {
            positional: values.iter().map(|value| value.clone().into()).collect(),
            named: HashMap::new(),
        }
    }
}

impl<S: ToString + Hash + Eq, V: Into<Value>> From<HashMap<S, V>> for QueryValues {
    /// Converts a `HashMap` into named values.
    fn from(values: HashMap<S, V>) -> QueryValues {
        let mut result = QueryValues::new();
        for (name, value) in values {
            result.insert_named(name, value);
        }
        result
    }
}

impl Serialize for QueryValues {
    fn serialize(&self, body: &mut RequestBody) {
        if !self.positional.is_empty() {
            body.insert(ARGS.into(), Value::Array(self.positional.clone()));
        }

        for (name, value) in &self.named {
            body.insert(name.clone(), value.clone());
        }
    }
}
