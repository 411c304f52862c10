// Tool arguments for catalogued endpoints
//
// Callers pass snake_case argument names; the Dashboard expects camelCase on
// the wire. Values are checked against the endpoint's parameter kinds before
// anything is sent.

use super::registry::{
    json_schema_boolean, json_schema_enum, json_schema_integer, json_schema_number,
    json_schema_object, json_schema_string,
};
use anyhow::{anyhow, bail, Context, Result};
use meraki_sdk::endpoint::{path_param_description, snake_case};
use meraki_sdk::{CallArgs, Endpoint, HttpMethod, Param, ParamKind};
use serde_json::{json, Map, Value};

/// Must be `true` before a destructive tool runs
pub const CONFIRMED_ARG: &str = "confirmed";
pub const PER_PAGE_ARG: &str = "per_page";
pub const STARTING_AFTER_ARG: &str = "starting_after";
pub const ENDING_BEFORE_ARG: &str = "ending_before";
pub const TOTAL_PAGES_ARG: &str = "total_pages";

/// Input schema for an endpoint's tool
pub fn input_schema(endpoint: &Endpoint) -> Value {
    let mut properties = Map::new();
    let mut required: Vec<String> = Vec::new();

    for name in endpoint.path_params() {
        let arg = snake_case(name);
        properties.insert(arg.clone(), json_schema_string(&path_param_description(name)));
        required.push(arg);
    }

    for param in endpoint.query.iter().chain(endpoint.body) {
        let arg = param.arg_name();
        properties.insert(arg.clone(), param_schema(param));
        if param.required {
            required.push(arg);
        }
    }

    if endpoint.paginated {
        properties.insert(
            PER_PAGE_ARG.to_string(),
            json_schema_integer("Number of entries per page", Some(1), None),
        );
        properties.insert(
            STARTING_AFTER_ARG.to_string(),
            json_schema_string("Token marking the start of the page"),
        );
        properties.insert(
            ENDING_BEFORE_ARG.to_string(),
            json_schema_string("Token marking the end of the page"),
        );
        properties.insert(
            TOTAL_PAGES_ARG.to_string(),
            json!({
                "type": ["integer", "string"],
                "description": "Pages to fetch: 1 for the first page only, -1 or \"all\" for every page"
            }),
        );
    }

    if endpoint.is_destructive() {
        properties.insert(
            CONFIRMED_ARG.to_string(),
            json_schema_boolean("Must be true to execute this destructive operation"),
        );
    }

    json_schema_object(
        Value::Object(properties),
        required.iter().map(String::as_str).collect(),
    )
}

fn param_schema(param: &Param) -> Value {
    match param.kind {
        ParamKind::String => json_schema_string(param.description),
        ParamKind::Integer { min, max } => json_schema_integer(param.description, min, max),
        ParamKind::Number => json_schema_number(param.description),
        ParamKind::Boolean => json_schema_boolean(param.description),
        ParamKind::Enum(values) => json_schema_enum(values, param.description),
        ParamKind::StringList => json!({
            "type": ["array", "string"],
            "items": {"type": "string"},
            "description": format!("{} (list or comma-separated)", param.description)
        }),
        ParamKind::Json => json!({
            "type": ["object", "array", "string"],
            "description": format!("{} (JSON)", param.description)
        }),
    }
}

/// Whether the caller confirmed a destructive operation
pub fn is_confirmed(args: &Map<String, Value>) -> bool {
    match args.get(CONFIRMED_ARG) {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s.eq_ignore_ascii_case("true"),
        _ => false,
    }
}

/// Validate tool arguments and map them onto a Dashboard call
pub fn build_call_args(endpoint: &Endpoint, args: &Map<String, Value>) -> Result<CallArgs> {
    let mut call = CallArgs::new();

    for name in endpoint.path_params() {
        let arg = snake_case(name);
        let value = lookup(args, &arg, name)
            .ok_or_else(|| anyhow!("Missing required parameter: {}", arg))?;
        let value = scalar_string(value)
            .ok_or_else(|| anyhow!("{} must be a string", arg))?;
        if value.trim().is_empty() {
            bail!("Missing required parameter: {}", arg);
        }
        call = call.path(name, value);
    }

    for param in endpoint.query {
        if let Some(value) = checked(param, args)? {
            for (key, v) in query_pairs(param.name, &value) {
                call.query.push((key, v));
            }
        }
    }

    let mut body = Map::new();
    for param in endpoint.body {
        if let Some(value) = checked(param, args)? {
            body.insert(param.name.to_string(), value);
        }
    }
    if !body.is_empty() && endpoint.method != HttpMethod::Get {
        call = call.body(Value::Object(body));
    }

    if endpoint.paginated {
        if let Some(value) = args.get(PER_PAGE_ARG).filter(|v| !v.is_null()) {
            let per_page = integer(value)
                .ok_or_else(|| anyhow!("{} must be an integer", PER_PAGE_ARG))?;
            if per_page < 1 {
                bail!("{} must be at least 1", PER_PAGE_ARG);
            }
            call = call.query("perPage", per_page);
        }
        for (arg, wire) in [
            (STARTING_AFTER_ARG, "startingAfter"),
            (ENDING_BEFORE_ARG, "endingBefore"),
        ] {
            if let Some(value) = args.get(arg).and_then(scalar_string) {
                call = call.query(wire, value);
            }
        }
        if let Some(value) = args.get(TOTAL_PAGES_ARG).filter(|v| !v.is_null()) {
            call = call.total_pages(total_pages(value)?);
        }
    }

    Ok(call)
}

/// Snake_case name first, the wire name as a fallback
fn lookup<'a>(args: &'a Map<String, Value>, arg: &str, wire: &str) -> Option<&'a Value> {
    args.get(arg)
        .or_else(|| args.get(wire))
        .filter(|v| !v.is_null())
}

fn checked(param: &Param, args: &Map<String, Value>) -> Result<Option<Value>> {
    let arg = param.arg_name();
    match lookup(args, &arg, param.name) {
        Some(value) => coerce(param, &arg, value).map(Some),
        None if param.required => bail!("Missing required parameter: {}", arg),
        None => Ok(None),
    }
}

/// Check a value against its parameter kind, converting lenient inputs
/// (numeric strings, comma lists, JSON text) to the wire shape
fn coerce(param: &Param, arg: &str, value: &Value) -> Result<Value> {
    match param.kind {
        ParamKind::String => {
            scalar_string(value)
                .map(Value::String)
                .ok_or_else(|| anyhow!("{} must be a string", arg))
        }
        ParamKind::Integer { min, max } => {
            let n = integer(value).ok_or_else(|| anyhow!("{} must be an integer", arg))?;
            match (min, max) {
                (Some(lo), Some(hi)) if n < lo || n > hi => {
                    bail!("{} must be between {} and {}", arg, lo, hi)
                }
                (Some(lo), None) if n < lo => bail!("{} must be at least {}", arg, lo),
                (None, Some(hi)) if n > hi => bail!("{} must be at most {}", arg, hi),
                _ => Ok(json!(n)),
            }
        }
        ParamKind::Number => {
            let n = match value {
                Value::Number(n) => n.as_f64(),
                Value::String(s) => s.trim().parse::<f64>().ok(),
                _ => None,
            };
            n.map(|n| json!(n))
                .ok_or_else(|| anyhow!("{} must be a number", arg))
        }
        ParamKind::Boolean => match value {
            Value::Bool(b) => Ok(Value::Bool(*b)),
            Value::String(s) if s.eq_ignore_ascii_case("true") => Ok(Value::Bool(true)),
            Value::String(s) if s.eq_ignore_ascii_case("false") => Ok(Value::Bool(false)),
            _ => bail!("{} must be a boolean", arg),
        },
        ParamKind::Enum(allowed) => {
            let s = scalar_string(value).ok_or_else(|| anyhow!("{} must be a string", arg))?;
            if allowed.contains(&s.as_str()) {
                Ok(Value::String(s))
            } else {
                bail!("{} must be one of: {}", arg, allowed.join(", "))
            }
        }
        ParamKind::StringList => match value {
            Value::Array(items) => items
                .iter()
                .map(|item| {
                    scalar_string(item)
                        .map(Value::String)
                        .ok_or_else(|| anyhow!("{} must be a list of strings", arg))
                })
                .collect::<Result<Vec<_>>>()
                .map(Value::Array),
            Value::String(s) if s.trim_start().starts_with('[') => {
                let parsed: Vec<String> = serde_json::from_str(s)
                    .with_context(|| format!("{} must be a list of strings", arg))?;
                Ok(json!(parsed))
            }
            Value::String(s) => Ok(Value::Array(
                s.split(',')
                    .map(str::trim)
                    .filter(|item| !item.is_empty())
                    .map(|item| Value::String(item.to_string()))
                    .collect(),
            )),
            _ => bail!("{} must be a list of strings", arg),
        },
        ParamKind::Json => match value {
            Value::String(s) => {
                serde_json::from_str(s).with_context(|| format!("{} must be valid JSON", arg))
            }
            other => Ok(other.clone()),
        },
    }
}

fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn total_pages(value: &Value) -> Result<i64> {
    if let Value::String(s) = value {
        if s.eq_ignore_ascii_case("all") {
            return Ok(-1);
        }
    }
    match integer(value) {
        Some(n) if n == -1 || n >= 1 => Ok(n),
        _ => bail!("{} must be a positive integer, -1 or \"all\"", TOTAL_PAGES_ARG),
    }
}

/// Query pairs for one parameter; arrays use the `name[]` form
fn query_pairs(name: &str, value: &Value) -> Vec<(String, String)> {
    match value {
        Value::Array(items) => items
            .iter()
            .map(|item| {
                let v = scalar_string(item).unwrap_or_else(|| item.to_string());
                (format!("{}[]", name), v)
            })
            .collect(),
        Value::Object(_) => vec![(name.to_string(), value.to_string())],
        other => vec![(
            name.to_string(),
            scalar_string(other).unwrap_or_default(),
        )],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meraki_sdk::SdkCategory;

    const PORTS: &[Param] = &[
        Param::ranged("vlan", 1, 4094, "Access VLAN"),
        Param::boolean("poeEnabled", "PoE on or off"),
        Param::one_of("type", &["access", "trunk"], "Port type"),
        Param::list("tags", "Port tags"),
    ];

    const UPDATE_PORT: Endpoint = Endpoint::new(
        SdkCategory::Switch,
        HttpMethod::Put,
        "updateDeviceSwitchPort",
        "/devices/{serial}/switch/ports/{portId}",
        "Update a switch port",
    )
    .body(PORTS);

    const CLIENTS_QUERY: &[Param] = &[
        Param::integer("timespan", "Lookback in seconds"),
        Param::list("statuses", "Filter by status"),
    ];

    const CLIENTS: Endpoint = Endpoint::new(
        SdkCategory::Networks,
        HttpMethod::Get,
        "getNetworkClients",
        "/networks/{networkId}/clients",
        "List clients",
    )
    .query(CLIENTS_QUERY)
    .paginated();

    const RULES: &[Param] = &[Param::json("rules", "Firewall rules").required()];

    const FIREWALL: Endpoint = Endpoint::new(
        SdkCategory::Appliance,
        HttpMethod::Put,
        "updateNetworkApplianceFirewallL3FirewallRules",
        "/networks/{networkId}/appliance/firewall/l3FirewallRules",
        "Update L3 rules",
    )
    .body(RULES);

    fn args(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_schema_lists_path_and_body_params() {
        let schema = input_schema(&UPDATE_PORT);
        let props = &schema["properties"];
        assert!(props.get("serial").is_some());
        assert!(props.get("port_id").is_some());
        assert!(props.get("poe_enabled").is_some());
        assert_eq!(props["vlan"]["maximum"], 4094);
        assert_eq!(schema["required"], json!(["serial", "port_id"]));
        assert!(props.get(CONFIRMED_ARG).is_none());
    }

    #[test]
    fn test_schema_adds_pagination_args() {
        let schema = input_schema(&CLIENTS);
        assert!(schema["properties"].get(PER_PAGE_ARG).is_some());
        assert!(schema["properties"].get(TOTAL_PAGES_ARG).is_some());
    }

    #[test]
    fn test_build_maps_snake_case_to_wire_names() {
        let call = build_call_args(
            &UPDATE_PORT,
            &args(json!({
                "serial": "Q2XX", "port_id": 4, "vlan": "20",
                "poe_enabled": "false", "type": "access", "tags": "a, b"
            })),
        )
        .unwrap();

        assert_eq!(call.path["serial"], "Q2XX");
        assert_eq!(call.path["portId"], "4");
        assert_eq!(
            call.body,
            Some(json!({"vlan": 20, "poeEnabled": false, "type": "access", "tags": ["a", "b"]}))
        );
    }

    #[test]
    fn test_vlan_out_of_range() {
        let err = build_call_args(
            &UPDATE_PORT,
            &args(json!({"serial": "Q2XX", "port_id": "1", "vlan": 5000})),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "vlan must be between 1 and 4094");
    }

    #[test]
    fn test_enum_membership() {
        let err = build_call_args(
            &UPDATE_PORT,
            &args(json!({"serial": "Q2XX", "port_id": "1", "type": "hybrid"})),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "type must be one of: access, trunk");
    }

    #[test]
    fn test_missing_path_param() {
        let err = build_call_args(&UPDATE_PORT, &args(json!({"serial": "Q2XX"}))).unwrap_err();
        assert_eq!(err.to_string(), "Missing required parameter: port_id");
    }

    #[test]
    fn test_json_param_must_parse() {
        let err = build_call_args(
            &FIREWALL,
            &args(json!({"network_id": "N_1", "rules": "[{not json"})),
        )
        .unwrap_err();
        assert!(err.to_string().contains("rules must be valid JSON"));

        let call = build_call_args(
            &FIREWALL,
            &args(json!({"network_id": "N_1", "rules": "[{\"policy\": \"deny\"}]"})),
        )
        .unwrap();
        assert_eq!(call.body.unwrap()["rules"][0]["policy"], "deny");
    }

    #[test]
    fn test_query_lists_and_pagination() {
        let call = build_call_args(
            &CLIENTS,
            &args(json!({
                "network_id": "N_1", "timespan": 3600,
                "statuses": ["Online", "Offline"],
                "per_page": 50, "total_pages": "all"
            })),
        )
        .unwrap();

        assert!(call.query.contains(&("timespan".to_string(), "3600".to_string())));
        assert!(call.query.contains(&("statuses[]".to_string(), "Online".to_string())));
        assert!(call.query.contains(&("statuses[]".to_string(), "Offline".to_string())));
        assert!(call.query.contains(&("perPage".to_string(), "50".to_string())));
        assert_eq!(call.total_pages, Some(-1));
        assert!(call.body.is_none());
    }

    #[test]
    fn test_total_pages_must_be_integer() {
        let err = build_call_args(
            &CLIENTS,
            &args(json!({"network_id": "N_1", "total_pages": "lots"})),
        )
        .unwrap_err();
        assert!(err.to_string().starts_with("total_pages must be"));
    }

    #[test]
    fn test_is_confirmed() {
        assert!(is_confirmed(&args(json!({"confirmed": true}))));
        assert!(is_confirmed(&args(json!({"confirmed": "true"}))));
        assert!(!is_confirmed(&args(json!({"confirmed": false}))));
        assert!(!is_confirmed(&args(json!({}))));
    }
}
