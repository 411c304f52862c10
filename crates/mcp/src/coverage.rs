//! Coverage of the Dashboard SDK method set by the implemented tools.
//!
//! The SDK method set comes from a JSON method list
//! (`{"switch": ["getDeviceSwitchPorts", ...]}`) or a Dashboard OpenAPI
//! document, where an operation's first tag is its category. Implemented
//! methods are the registry's operations plus any
//! `dashboard.<category>.<method>(` call sites found in source trees.

use chrono::{DateTime, Utc};
use meraki_sdk::endpoint::operation_verb;
use meraki_sdk::SdkCategory;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Write;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Missing methods listed per category in the console summary
const SUMMARY_MISSING: usize = 10;
/// Extra methods listed per category in the console summary
const SUMMARY_EXTRA: usize = 5;

const VERBS: &[&str] = &["get", "create", "update", "delete"];
const HTTP_METHODS: &[&str] = &["get", "post", "put", "delete", "patch"];

/// `dashboard.<category>.<method>(`
const CALL_SITE_PATTERN: &str = r"dashboard\.(\w+)\.(\w+)\s*\(";

/// Method names per category
pub type MethodSet = BTreeMap<String, BTreeSet<String>>;

#[derive(Debug, thiserror::Error)]
pub enum CoverageError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse SDK method list: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("SDK method list is neither a category map nor an OpenAPI document")]
    UnrecognizedFormat,

    #[error("Invalid call-site pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Failed to walk source tree: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Failed to write report to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Load the SDK method set from a file
pub fn load_sdk_methods(path: &Path) -> Result<MethodSet, CoverageError> {
    let content = std::fs::read_to_string(path).map_err(|source| CoverageError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let doc: Value = serde_json::from_str(&content)?;
    parse_sdk_methods(&doc)
}

/// Parse a method list or an OpenAPI document
pub fn parse_sdk_methods(doc: &Value) -> Result<MethodSet, CoverageError> {
    if let Some(paths) = doc.get("paths").and_then(Value::as_object) {
        return Ok(openapi_methods(paths));
    }

    let categories = doc.as_object().ok_or(CoverageError::UnrecognizedFormat)?;
    let mut methods = MethodSet::new();
    for (category, list) in categories {
        let list = list.as_array().ok_or(CoverageError::UnrecognizedFormat)?;
        let entry = methods.entry(category.clone()).or_default();
        for method in list {
            let method = method.as_str().ok_or(CoverageError::UnrecognizedFormat)?;
            entry.insert(method.to_string());
        }
    }
    Ok(methods)
}

fn openapi_methods(paths: &serde_json::Map<String, Value>) -> MethodSet {
    let mut methods = MethodSet::new();

    for item in paths.values().filter_map(Value::as_object) {
        for (verb, operation) in item {
            if !HTTP_METHODS.contains(&verb.as_str()) {
                continue;
            }
            let operation_id = operation.get("operationId").and_then(Value::as_str);
            let category = operation
                .get("tags")
                .and_then(Value::as_array)
                .and_then(|tags| tags.first())
                .and_then(Value::as_str);

            if let (Some(id), Some(category)) = (operation_id, category) {
                methods
                    .entry(category.to_string())
                    .or_default()
                    .insert(id.to_string());
            }
        }
    }

    methods
}

/// Operations of registered tools, keyed by category wire name
pub fn registry_methods(operations: &BTreeMap<SdkCategory, BTreeSet<String>>) -> MethodSet {
    operations
        .iter()
        .map(|(category, ops)| (category.as_str().to_string(), ops.clone()))
        .collect()
}

/// Scan source trees for `dashboard.<category>.<method>(` call sites
pub fn scan_sources(roots: &[PathBuf]) -> Result<MethodSet, CoverageError> {
    let pattern = Regex::new(CALL_SITE_PATTERN)?;
    let mut found = MethodSet::new();

    for root in roots {
        let walker = WalkDir::new(root)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden_or_build_dir(e.file_name()));

        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            let content = match std::fs::read_to_string(entry.path()) {
                Ok(content) => content,
                Err(e) => {
                    tracing::debug!(
                        path = %entry.path().display(),
                        error = %e,
                        "Skipping unreadable file"
                    );
                    continue;
                }
            };

            for caps in pattern.captures_iter(&content) {
                found
                    .entry(caps[1].to_string())
                    .or_default()
                    .insert(caps[2].to_string());
            }
        }
    }

    Ok(found)
}

fn is_hidden_or_build_dir(name: &std::ffi::OsStr) -> bool {
    let name = name.to_string_lossy();
    name.starts_with('.') || name == "target" || name == "node_modules" || name == "__pycache__"
}

/// Merge several method sets
pub fn merge(sets: impl IntoIterator<Item = MethodSet>) -> MethodSet {
    let mut merged = MethodSet::new();
    for set in sets {
        for (category, methods) in set {
            merged.entry(category).or_default().extend(methods);
        }
    }
    merged
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VerbCount {
    pub sdk: usize,
    pub implemented: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryCoverage {
    pub category: String,
    pub sdk_methods: usize,
    pub implemented: usize,
    pub coverage_pct: f64,
    pub missing: Vec<String>,
    pub extra: Vec<String>,
    pub verbs: BTreeMap<String, VerbCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageReport {
    pub generated_at: DateTime<Utc>,
    pub total_sdk_methods: usize,
    pub total_implemented: usize,
    pub overall_pct: f64,
    pub categories: Vec<CategoryCoverage>,
}

fn verb_bucket(method: &str) -> &'static str {
    let verb = operation_verb(method);
    VERBS.iter().find(|v| **v == verb).copied().unwrap_or("other")
}

fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    (part as f64 / whole as f64 * 1000.0).round() / 10.0
}

/// Compare the SDK method set against the implemented set
pub fn analyze(sdk: &MethodSet, implemented: &MethodSet) -> CoverageReport {
    let empty = BTreeSet::new();
    let categories: BTreeSet<&String> = sdk.keys().chain(implemented.keys()).collect();

    let mut report = CoverageReport {
        generated_at: Utc::now(),
        total_sdk_methods: 0,
        total_implemented: 0,
        overall_pct: 0.0,
        categories: Vec::new(),
    };

    for category in categories {
        let sdk_methods = sdk.get(category).unwrap_or(&empty);
        let done = implemented.get(category).unwrap_or(&empty);

        let covered: BTreeSet<&String> = sdk_methods.intersection(done).collect();
        let missing: Vec<String> = sdk_methods.difference(done).cloned().collect();
        let extra: Vec<String> = done.difference(sdk_methods).cloned().collect();

        let mut verbs: BTreeMap<String, VerbCount> = BTreeMap::new();
        for method in sdk_methods {
            let count = verbs.entry(verb_bucket(method).to_string()).or_default();
            count.sdk += 1;
            if covered.contains(method) {
                count.implemented += 1;
            }
        }

        report.total_sdk_methods += sdk_methods.len();
        report.total_implemented += covered.len();
        report.categories.push(CategoryCoverage {
            category: category.clone(),
            sdk_methods: sdk_methods.len(),
            implemented: covered.len(),
            coverage_pct: percent(covered.len(), sdk_methods.len()),
            missing,
            extra,
            verbs,
        });
    }

    report.overall_pct = percent(report.total_implemented, report.total_sdk_methods);
    report
}

impl CoverageReport {
    pub fn write_json(&self, path: &Path) -> Result<(), CoverageError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| CoverageError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Console summary
    pub fn summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "📊 SDK coverage: {}/{} methods ({:.1}%)\n",
            self.total_implemented, self.total_sdk_methods, self.overall_pct
        );

        for cat in &self.categories {
            let _ = writeln!(
                out,
                "📂 {}: {}/{} ({:.1}%)",
                cat.category, cat.implemented, cat.sdk_methods, cat.coverage_pct
            );

            if !cat.missing.is_empty() {
                let _ = writeln!(out, "   Missing:");
                for method in cat.missing.iter().take(SUMMARY_MISSING) {
                    let _ = writeln!(out, "   - {}", method);
                }
                if cat.missing.len() > SUMMARY_MISSING {
                    let _ = writeln!(out, "   ... and {} more", cat.missing.len() - SUMMARY_MISSING);
                }
            }

            if !cat.extra.is_empty() {
                let _ = writeln!(out, "   Not in SDK:");
                for method in cat.extra.iter().take(SUMMARY_EXTRA) {
                    let _ = writeln!(out, "   - {}", method);
                }
                if cat.extra.len() > SUMMARY_EXTRA {
                    let _ = writeln!(out, "   ... and {} more", cat.extra.len() - SUMMARY_EXTRA);
                }
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn set(entries: &[(&str, &[&str])]) -> MethodSet {
        entries
            .iter()
            .map(|(cat, methods)| {
                (
                    cat.to_string(),
                    methods.iter().map(|m| m.to_string()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_missing_is_sdk_minus_implemented() {
        let sdk = set(&[(
            "switch",
            &[
                "getDeviceSwitchPorts",
                "updateDeviceSwitchPort",
                "cycleDeviceSwitchPorts",
                "deleteSwitchStack",
            ],
        )]);
        let implemented = set(&[("switch", &["getDeviceSwitchPorts", "getCustomThing"])]);

        let report = analyze(&sdk, &implemented);
        let switch = &report.categories[0];

        assert_eq!(switch.sdk_methods, 4);
        assert_eq!(switch.implemented, 1);
        assert_eq!(switch.coverage_pct, 25.0);
        assert_eq!(
            switch.missing,
            vec!["cycleDeviceSwitchPorts", "deleteSwitchStack", "updateDeviceSwitchPort"]
        );
        assert_eq!(switch.extra, vec!["getCustomThing"]);
        assert_eq!(switch.verbs["get"], VerbCount { sdk: 1, implemented: 1 });
        assert_eq!(switch.verbs["delete"].sdk, 1);
        assert_eq!(switch.verbs["other"].sdk, 1);
        assert_eq!(report.overall_pct, 25.0);
    }

    #[test]
    fn test_parse_method_list() {
        let methods = parse_sdk_methods(&json!({
            "camera": ["getDeviceCameraSense", "updateDeviceCameraSense"],
            "sm": []
        }))
        .unwrap();
        assert_eq!(methods["camera"].len(), 2);
        assert!(methods["sm"].is_empty());

        assert!(matches!(
            parse_sdk_methods(&json!({"camera": "nope"})),
            Err(CoverageError::UnrecognizedFormat)
        ));
    }

    #[test]
    fn test_parse_openapi_first_tag() {
        let methods = parse_sdk_methods(&json!({
            "openapi": "3.0.1",
            "paths": {
                "/devices/{serial}/switch/ports": {
                    "get": {"operationId": "getDeviceSwitchPorts", "tags": ["switch", "configure", "ports"]},
                    "parameters": []
                },
                "/networks/{networkId}": {
                    "get": {"operationId": "getNetwork", "tags": ["networks", "configure"]},
                    "delete": {"operationId": "deleteNetwork", "tags": ["networks", "configure"]}
                }
            }
        }))
        .unwrap();

        assert_eq!(methods["switch"].len(), 1);
        assert!(methods["networks"].contains("deleteNetwork"));
    }

    #[test]
    fn test_scan_sources_finds_call_sites() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("tools_switch.py"),
            "result = meraki_client.dashboard.switch.getDeviceSwitchPorts(serial)\n\
             other = dashboard.switch.cycleDeviceSwitchPorts (serial, ports=p)\n\
             not_a_call = dashboard.switch.name\n",
        )
        .unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        std::fs::write(
            dir.path().join("nested").join("wireless.py"),
            "dashboard.wireless.getNetworkWirelessSsids(net)",
        )
        .unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        std::fs::write(
            dir.path().join(".git").join("ignored.py"),
            "dashboard.sm.wipeNetworkSmDevices(net)",
        )
        .unwrap();

        let found = scan_sources(&[dir.path().to_path_buf()]).unwrap();
        assert_eq!(found["switch"].len(), 2);
        assert!(found["wireless"].contains("getNetworkWirelessSsids"));
        assert!(!found.contains_key("sm"));
    }

    #[test]
    fn test_report_roundtrip_and_summary() {
        let dir = TempDir::new().unwrap();
        let sdk_file = dir.path().join("methods.json");
        std::fs::write(
            &sdk_file,
            json!({"licensing": (0..15).map(|i| format!("getThing{}", i)).collect::<Vec<_>>()})
                .to_string(),
        )
        .unwrap();

        let sdk = load_sdk_methods(&sdk_file).unwrap();
        let report = analyze(&sdk, &MethodSet::new());
        let summary = report.summary();
        assert!(summary.contains("📂 licensing: 0/15 (0.0%)"));
        assert!(summary.contains("   ... and 5 more"));

        let out = dir.path().join("report.json");
        report.write_json(&out).unwrap();
        let back: CoverageReport =
            serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(back.categories[0].missing.len(), 15);
    }

    #[test]
    fn test_registry_methods_use_wire_names() {
        let mut ops = BTreeMap::new();
        ops.insert(
            SdkCategory::CellularGateway,
            BTreeSet::from(["getDeviceCellularGatewayLan".to_string()]),
        );
        let methods = registry_methods(&ops);
        assert!(methods["cellularGateway"].contains("getDeviceCellularGatewayLan"));
    }
}
