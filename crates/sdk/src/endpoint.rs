//! Endpoint descriptors for the Dashboard API.
//!
//! Every SDK operation is one [`Endpoint`] row: an operation id, an HTTP
//! method, a path template and the query/body parameters it accepts. The
//! catalog tables in [`crate::catalog`] are built from these with `const`
//! constructors.

use crate::error::{MerakiError, MerakiResult};
use meraki_mcp_core::SdkCategory;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use std::collections::BTreeMap;
use std::fmt;

/// Characters escaped when substituting a value into a path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Operation-id prefixes that mark an operation as destructive
pub const DESTRUCTIVE_PREFIXES: &[&str] = &[
    "delete", "remove", "cycle", "reboot", "wipe", "unbind", "unenroll", "revoke",
];

/// Maximum tool name length accepted by MCP clients
pub const MAX_TOOL_NAME_LEN: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value type of a query or body parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamKind {
    String,
    Integer { min: Option<i64>, max: Option<i64> },
    Number,
    Boolean,
    Enum(&'static [&'static str]),
    StringList,
    /// Free-form JSON (objects or arrays of rules)
    Json,
}

/// A named query or body parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Param {
    /// Wire name, camelCase as the API expects it
    pub name: &'static str,
    pub kind: ParamKind,
    pub required: bool,
    pub description: &'static str,
}

impl Param {
    pub const fn new(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            required: false,
            description,
        }
    }

    pub const fn string(name: &'static str, description: &'static str) -> Self {
        Self::new(name, ParamKind::String, description)
    }

    pub const fn integer(name: &'static str, description: &'static str) -> Self {
        Self::new(name, ParamKind::Integer { min: None, max: None }, description)
    }

    pub const fn ranged(
        name: &'static str,
        min: i64,
        max: i64,
        description: &'static str,
    ) -> Self {
        Self::new(
            name,
            ParamKind::Integer {
                min: Some(min),
                max: Some(max),
            },
            description,
        )
    }

    pub const fn number(name: &'static str, description: &'static str) -> Self {
        Self::new(name, ParamKind::Number, description)
    }

    pub const fn boolean(name: &'static str, description: &'static str) -> Self {
        Self::new(name, ParamKind::Boolean, description)
    }

    pub const fn one_of(
        name: &'static str,
        values: &'static [&'static str],
        description: &'static str,
    ) -> Self {
        Self::new(name, ParamKind::Enum(values), description)
    }

    pub const fn list(name: &'static str, description: &'static str) -> Self {
        Self::new(name, ParamKind::StringList, description)
    }

    pub const fn json(name: &'static str, description: &'static str) -> Self {
        Self::new(name, ParamKind::Json, description)
    }

    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Argument name exposed to tool callers
    pub fn arg_name(&self) -> String {
        snake_case(self.name)
    }
}

/// One Dashboard API operation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Endpoint {
    pub category: SdkCategory,
    /// SDK operation id, e.g. `getNetworkApplianceVlans`
    pub operation_id: &'static str,
    pub method: HttpMethod,
    /// Path template relative to the base URL, e.g. `/networks/{networkId}`
    pub path: &'static str,
    pub summary: &'static str,
    pub query: &'static [Param],
    pub body: &'static [Param],
    /// Supports `perPage`/`startingAfter` pagination
    pub paginated: bool,
    /// Forces the confirmation gate regardless of the operation id
    pub force_destructive: bool,
    /// Explicit tool name when the derived one is unsuitable
    pub tool_name_override: Option<&'static str>,
}

impl Endpoint {
    pub const fn new(
        category: SdkCategory,
        method: HttpMethod,
        operation_id: &'static str,
        path: &'static str,
        summary: &'static str,
    ) -> Self {
        Self {
            category,
            operation_id,
            method,
            path,
            summary,
            query: &[],
            body: &[],
            paginated: false,
            force_destructive: false,
            tool_name_override: None,
        }
    }

    pub const fn query(mut self, params: &'static [Param]) -> Self {
        self.query = params;
        self
    }

    pub const fn body(mut self, params: &'static [Param]) -> Self {
        self.body = params;
        self
    }

    pub const fn paginated(mut self) -> Self {
        self.paginated = true;
        self
    }

    pub const fn destructive(mut self) -> Self {
        self.force_destructive = true;
        self
    }

    pub const fn named(mut self, tool_name: &'static str) -> Self {
        self.tool_name_override = Some(tool_name);
        self
    }

    /// Placeholder names in the path template, in order
    pub fn path_params(&self) -> Vec<&'static str> {
        let path: &'static str = self.path;
        let mut params = Vec::new();
        let mut rest = path;

        while let Some(start) = rest.find('{') {
            let after = &rest[start + 1..];
            match after.find('}') {
                Some(end) => {
                    params.push(&after[..end]);
                    rest = &after[end + 1..];
                }
                None => break,
            }
        }

        params
    }

    /// Substitute path parameters, percent-encoding each value
    pub fn render_path(&self, values: &BTreeMap<String, String>) -> MerakiResult<String> {
        let mut rendered = String::with_capacity(self.path.len() + 32);
        let mut rest = self.path;

        while let Some(start) = rest.find('{') {
            rendered.push_str(&rest[..start]);
            let after = &rest[start + 1..];
            let end = after.find('}').ok_or_else(|| {
                MerakiError::Config(format!("Malformed path template: {}", self.path))
            })?;
            let name = &after[..end];

            let value = values
                .get(name)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| {
                    MerakiError::InvalidInput(format!("Missing required parameter: {}", name))
                })?;
            rendered.extend(utf8_percent_encode(value, PATH_SEGMENT));

            rest = &after[end + 1..];
        }
        rendered.push_str(rest);

        Ok(rendered)
    }

    /// Whether the operation needs explicit confirmation before it runs
    pub fn is_destructive(&self) -> bool {
        self.force_destructive
            || DESTRUCTIVE_PREFIXES
                .iter()
                .any(|prefix| self.operation_id.starts_with(prefix))
    }

    /// The leading verb of the operation id (`get`, `update`, ...)
    pub fn verb(&self) -> &'static str {
        operation_verb(self.operation_id)
    }

    /// Unique MCP tool name for this operation
    pub fn tool_name(&self) -> String {
        match self.tool_name_override {
            Some(name) => name.to_string(),
            None => tool_name_for(self.operation_id),
        }
    }

    /// Title-cased operation id (`getNetworkDevices` -> `Get Network Devices`)
    pub fn title(&self) -> String {
        humanize(self.operation_id)
    }
}

/// The leading lowercase run of an operation id
pub fn operation_verb(operation_id: &str) -> &str {
    let end = operation_id
        .find(|c: char| c.is_ascii_uppercase())
        .unwrap_or(operation_id.len());
    &operation_id[..end]
}

/// Convert a camelCase identifier to snake_case
pub fn snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 8);
    let mut prev_lower = false;

    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            if prev_lower {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
            prev_lower = false;
        } else {
            out.push(ch);
            prev_lower = ch.is_ascii_lowercase() || ch.is_ascii_digit();
        }
    }

    out
}

/// Split a camelCase identifier into capitalized words
pub fn humanize(name: &str) -> String {
    snake_case(name)
        .split('_')
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Derive a tool name from an operation id, shortened to fit
/// [`MAX_TOOL_NAME_LEN`]
pub fn tool_name_for(operation_id: &str) -> String {
    let name = snake_case(operation_id);
    if name.len() <= MAX_TOOL_NAME_LEN {
        return name;
    }

    let mut short = name
        .replace("organization_", "org_")
        .replace("administered_", "admin_")
        .replace("_cellular_gateway_", "_cellular_")
        .replace("_configuration_", "_config_");
    if short.len() <= MAX_TOOL_NAME_LEN {
        return short;
    }

    match short[..=MAX_TOOL_NAME_LEN].rfind('_') {
        Some(cut) => short.truncate(cut),
        None => short.truncate(MAX_TOOL_NAME_LEN),
    }
    short
}

/// Human description of a path parameter
pub fn path_param_description(name: &str) -> String {
    match name {
        "organizationId" => "Organization ID".to_string(),
        "networkId" => "Network ID".to_string(),
        "serial" => "Device serial number".to_string(),
        "number" => "SSID number (0-14)".to_string(),
        other => humanize(other),
    }
}
