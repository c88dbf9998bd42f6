//! Reading standard documents from YAML files.
//!
//! A standard document is a single YAML mapping. The `name` key holds the
//! standard's name; every other key is a control identifier mapped to a
//! control body:
//!
//! ```yaml
//! name: NIST-800-53
//! AC-1:
//!   family: AC
//!   name: Access Control Policy and Procedures
//! ```

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
use sha2::Digest;
use tracing::{debug, info, info_span};

use crate::error::{Result, StandardError};
use crate::registry::StandardsRegistry;
use crate::standard::{Control, Standard};

const NAME_KEY: &str = "name";

/// Summary of a successful load.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct LoadReport {
    pub name: String,
    pub path: PathBuf,
    pub control_count: usize,
    /// Lowercase hex SHA-256 of the file contents.
    pub sha256: String,
}

impl StandardsRegistry {
    /// Load the standard at `path` and register it under its name.
    ///
    /// Any existing standard with the same name is replaced. On error the
    /// registry is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`StandardError::ReadFile`] when the file cannot be read and
    /// [`StandardError::StandardSchema`] when its contents are not a valid
    /// standard document.
    pub fn load_standard(&mut self, path: impl AsRef<Path>) -> Result<LoadReport> {
        let path = path.as_ref();
        let span = info_span!("load_standard", path = %path.display());
        let _guard = span.enter();

        let (standard, report) = read_and_parse(path)?;
        self.put(standard);
        info!(
            standard = %report.name,
            controls = report.control_count,
            "registered standard"
        );
        Ok(report)
    }
}

/// Read and validate the standard at `path` without registering it.
pub fn read_standard(path: &Path) -> Result<(Standard, LoadReport)> {
    let span = info_span!("read_standard", path = %path.display());
    let _guard = span.enter();
    read_and_parse(path)
}

fn read_and_parse(path: &Path) -> Result<(Standard, LoadReport)> {
    if path.as_os_str().is_empty() {
        return Err(StandardError::read_file(
            path,
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "path is empty"),
        ));
    }
    let bytes = std::fs::read(path).map_err(|e| StandardError::read_file(path, e))?;
    debug!(bytes = bytes.len(), "read standard file");

    let standard = parse_standard(&bytes, path)?;
    let report = LoadReport {
        name: standard.name().to_string(),
        path: path.to_path_buf(),
        control_count: standard.len(),
        sha256: sha256_hex(&bytes),
    };
    Ok((standard, report))
}

/// Parse and validate standard document bytes. `path` is only used for error
/// reporting.
pub fn parse_standard(bytes: &[u8], path: &Path) -> Result<Standard> {
    let document: StandardDocument =
        serde_yaml::from_slice(bytes).map_err(|e| StandardError::schema(path, e.to_string()))?;
    if document.name.trim().is_empty() {
        return Err(StandardError::schema(path, "standard name must not be blank"));
    }
    debug!(
        standard = %document.name,
        controls = document.controls.len(),
        "parsed standard document"
    );
    Ok(Standard::new(document.name, document.controls))
}

fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(sha2::Sha256::digest(bytes))
}

/// Raw shape of a standard document: `name` plus inline control entries.
struct StandardDocument {
    name: String,
    controls: HashMap<String, Control>,
}

impl<'de> Deserialize<'de> for StandardDocument {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(StandardDocumentVisitor)
    }
}

struct StandardDocumentVisitor;

impl<'de> Visitor<'de> for StandardDocumentVisitor {
    type Value = StandardDocument;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a mapping with a `name` and control entries")
    }

    fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut name: Option<String> = None;
        let mut controls: HashMap<String, Control> = HashMap::new();

        // Keys go through `String` directly so plain scalars such as `1.10`
        // keep their source text instead of being read as numbers.
        while let Some(key) = map.next_key::<String>()? {
            if key == NAME_KEY {
                if name.is_some() {
                    return Err(de::Error::duplicate_field(NAME_KEY));
                }
                name = Some(map.next_value()?);
                continue;
            }
            if key.is_empty() {
                return Err(de::Error::custom("control identifier must not be empty"));
            }
            // A null body (`AC-1:` or `AC-1: ~`) is an empty control.
            let control = map.next_value::<Option<Control>>()?.unwrap_or_default();
            match controls.entry(key) {
                Entry::Occupied(entry) => {
                    return Err(de::Error::custom(format_args!(
                        "duplicate control identifier `{}`",
                        entry.key()
                    )));
                }
                Entry::Vacant(entry) => {
                    entry.insert(control);
                }
            }
        }

        let name = name.ok_or_else(|| de::Error::missing_field(NAME_KEY))?;
        Ok(StandardDocument { name, controls })
    }
}
