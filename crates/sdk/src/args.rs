//! Arguments for a single Dashboard operation call.

use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Path values, query pairs, JSON body and pagination for one call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallArgs {
    pub path: BTreeMap<String, String>,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    /// Pages to fetch for paginated endpoints; `-1` fetches all
    pub total_pages: Option<i64>,
}

impl CallArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a path placeholder value (`networkId`, `serial`, ...)
    pub fn path(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.path.insert(name.into(), value.to_string());
        self
    }

    pub fn query(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((name.into(), value.to_string()));
        self
    }

    /// Append an array query parameter using the `name[]=v` form
    pub fn query_list<I, V>(mut self, name: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: ToString,
    {
        let key = format!("{}[]", name);
        for value in values {
            self.query.push((key.clone(), value.to_string()));
        }
        self
    }

    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Set one field of a JSON object body
    pub fn body_field(mut self, name: impl Into<String>, value: Value) -> Self {
        match self.body {
            Some(Value::Object(ref mut fields)) => {
                fields.insert(name.into(), value);
            }
            _ => {
                let mut fields = Map::new();
                fields.insert(name.into(), value);
                self.body = Some(Value::Object(fields));
            }
        }
        self
    }

    pub fn total_pages(mut self, pages: i64) -> Self {
        self.total_pages = Some(pages);
        self
    }

    /// Fetch every page of a paginated endpoint
    pub fn all_pages(self) -> Self {
        self.total_pages(-1)
    }
}
