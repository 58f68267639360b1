//! TOML device definitions.
//!
//! A definition file names a registered device kind, the port it answers
//! on, and kind-specific parameters:
//!
//! ```toml
//! kind = "pulse"
//! port = 0x40
//! period-ms = 50
//! vector = 0x10
//! ```
//!
//! [`load_directory`] reads every `.toml` file in name order, resolves
//! each `kind` against the registry, and constructs the devices against
//! the shared interrupt line.

use std::path::Path;

use serde::Deserialize;
use zet80_core::core::{Device, IntLine};

use crate::registry;

/// One parsed definition file. Which optional fields matter depends on
/// the kind; factories reject definitions they cannot use.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeviceDef {
    /// Registry key selecting the device kind.
    pub kind: String,
    /// I/O port the device answers on.
    pub port: u8,
    /// Interrupt period in milliseconds (`pulse`).
    #[serde(rename = "period-ms")]
    pub period_ms: Option<u64>,
    /// Byte driven during interrupt acceptance: the IM 2 vector, or the
    /// instruction for IM 0 (`pulse`, `keyboard`).
    pub vector: Option<u8>,
    /// Initial byte (`latch`).
    pub value: Option<u8>,
}

impl DeviceDef {
    /// Parse one definition from TOML text. `file` labels errors.
    pub fn from_toml(file: &str, text: &str) -> Result<Self, DeviceError> {
        toml::from_str(text).map_err(|e| DeviceError::Parse {
            file: file.to_string(),
            message: e.message().to_string(),
        })
    }
}

/// Errors from reading or resolving device definitions.
#[derive(Debug)]
pub enum DeviceError {
    /// Underlying I/O error (directory or file unreadable).
    Io(std::io::Error),

    /// Definition file is not valid TOML for a definition.
    Parse { file: String, message: String },

    /// `kind` does not name a registered device kind.
    UnknownKind { file: String, kind: String },

    /// A kind-specific parameter is missing or unusable.
    BadValue { kind: String, message: String },
}

impl std::fmt::Display for DeviceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Parse { file, message } => {
                write!(f, "device definition {file}: {message}")
            }
            Self::UnknownKind { file, kind } => {
                write!(f, "device definition {file}: unknown kind \"{kind}\"")
            }
            Self::BadValue { kind, message } => write!(f, "{kind} device: {message}"),
        }
    }
}

impl std::error::Error for DeviceError {}

impl From<std::io::Error> for DeviceError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Read every `.toml` definition in `dir`, in file-name order, and
/// construct the devices against `line`. The returned devices have not
/// been started or attached.
pub fn load_directory(dir: &Path, line: &IntLine) -> Result<Vec<Box<dyn Device>>, DeviceError> {
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "toml") {
            paths.push(path);
        }
    }
    paths.sort();

    let mut devices = Vec::with_capacity(paths.len());
    for path in &paths {
        let file = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        let text = std::fs::read_to_string(path)?;
        let def = DeviceDef::from_toml(&file, &text)?;
        let entry = registry::find(&def.kind).ok_or_else(|| DeviceError::UnknownKind {
            file: file.clone(),
            kind: def.kind.clone(),
        })?;
        devices.push((entry.create)(&def, line.clone())?);
    }
    Ok(devices)
}
