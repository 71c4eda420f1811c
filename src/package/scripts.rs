//! Script parsing from package.json.
//!
//! Only the `scripts` mapping is read; every other field is ignored.
//! Loading is lenient at the dispatch boundary: a missing or malformed
//! package.json degrades to an empty script set with a diagnostic, so the
//! command still falls through to the raw manager subcommand.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

/// The subset of package.json this tool reads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Package {
    /// The `scripts` mapping, if present.
    #[serde(default)]
    pub scripts: BTreeMap<String, String>,
}

/// The scripts declared in a package.json.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scripts {
    entries: BTreeMap<String, String>,
}

impl Scripts {
    /// Create an empty script set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a script's command by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    /// Check whether a script with this name is declared.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of declared scripts.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no scripts are declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over (name, command) pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, c)| (n.as_str(), c.as_str()))
    }
}

impl From<BTreeMap<String, String>> for Scripts {
    fn from(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }
}

/// Parse the scripts mapping from raw package.json content.
///
/// # Errors
///
/// Returns an error if the JSON is malformed.
///
/// # Examples
///
/// ```
/// use auto_pm::package::parse_scripts_from_json;
///
/// let json = r#"{"scripts": {"dev": "vite", "build": "vite build"}}"#;
/// let scripts = parse_scripts_from_json(json).unwrap();
/// assert_eq!(scripts.len(), 2);
/// assert_eq!(scripts.get("dev"), Some("vite"));
/// ```
pub fn parse_scripts_from_json(content: &str) -> Result<Scripts, serde_json::Error> {
    let package: Package = serde_json::from_str(content)?;
    Ok(Scripts::from(package.scripts))
}

/// Load the scripts for a project root, leniently.
///
/// A missing package.json yields an empty set. A malformed package.json
/// yields an empty set after printing a diagnostic to stderr; the invocation
/// proceeds rather than aborting.
pub fn load_scripts(project_root: &Path) -> Scripts {
    let package_json = project_root.join("package.json");

    let content = match std::fs::read_to_string(&package_json) {
        Ok(content) => content,
        Err(_) => return Scripts::new(),
    };

    match parse_scripts_from_json(&content) {
        Ok(scripts) => scripts,
        Err(e) => {
            eprintln!(
                "Error parsing package.json at {}: {}",
                package_json.display(),
                format_json_error(&content, &e)
            );
            Scripts::new()
        }
    }
}

/// Format a JSON parsing error with the offending line and a pointer.
fn format_json_error(content: &str, error: &serde_json::Error) -> String {
    let line = error.line();
    let column = error.column();

    if let Some(error_line) = content.lines().nth(line.saturating_sub(1)) {
        let pointer = " ".repeat(column.saturating_sub(1)) + "^";
        format!("{error}\n    {error_line}\n    {pointer}")
    } else {
        format!("{error}")
    }
}
