//! Command surface shared with the application layer.

use std::collections::HashMap;

use serde::Serialize;
use strum::{Display, EnumString, IntoStaticStr};

use crate::error::MediaBridgeError;

/// Commands understood by the bridge. Names on the wire are camelCase.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr, Display, uniffi::Enum,
)]
#[strum(serialize_all = "camelCase")]
pub enum Command {
    /// Ask the OS indexer to rescan a file.
    ScanFile,
    /// Save an image into the photo library.
    SaveImage,
    /// Save a video into the photo library.
    SaveVideo,
    /// Look up the original filename of an asset.
    GetOriginalFilename,
    /// Delete assets by identifier.
    DeleteAssets,
    /// Platform version number.
    GetSdkInt,
    /// Legacy public DCIM directory.
    GetLegacyDcim,
}

impl Command {
    /// Parses a wire name. Unknown names yield `None`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        name.parse().ok()
    }

    /// Wire name of the command.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// A single value in a command's argument bundle.
#[derive(Debug, Clone, PartialEq, uniffi::Enum)]
pub enum ArgumentValue {
    /// Explicit null.
    Null,
    /// Boolean.
    Bool(bool),
    /// Integer.
    Int(i64),
    /// Floating point number.
    Float(f64),
    /// String.
    Text(String),
    /// List of strings.
    TextList(Vec<String>),
    /// A value the bridge never reads, such as a map or a mixed list.
    Other,
}

impl From<serde_json::Value> for ArgumentValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => n
                .as_i64()
                .map(Self::Int)
                .or_else(|| n.as_f64().map(Self::Float))
                .unwrap_or(Self::Other),
            Value::String(s) => Self::Text(s),
            Value::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect::<Option<Vec<_>>>()
                .map_or(Self::Other, Self::TextList),
            Value::Object(_) => Self::Other,
        }
    }
}

impl From<&str> for ArgumentValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Flat key-value argument bundle of one command.
pub type Arguments = HashMap<String, ArgumentValue>;

/// Reads a string argument. Absent keys and values of another type read as `None`.
pub(crate) fn string_arg(arguments: &Arguments, key: &str) -> Option<String> {
    match arguments.get(key) {
        Some(ArgumentValue::Text(s)) => Some(s.clone()),
        _ => None,
    }
}

/// Reads a list-of-strings argument. Absent keys and values of another type read as `None`.
pub(crate) fn string_list_arg(arguments: &Arguments, key: &str) -> Option<Vec<String>> {
    match arguments.get(key) {
        Some(ArgumentValue::TextList(list)) => Some(list.clone()),
        _ => None,
    }
}

/// Parses a JSON object into an argument bundle.
///
/// Anything that is not a JSON object (including malformed input) yields an
/// empty bundle, so the command reports its missing arguments.
pub(crate) fn arguments_from_json(json: &str) -> Arguments {
    match serde_json::from_str::<serde_json::Value>(json) {
        Ok(serde_json::Value::Object(map)) => map
            .into_iter()
            .map(|(key, value)| (key, ArgumentValue::from(value)))
            .collect(),
        Ok(_) => Arguments::new(),
        Err(e) => {
            log::warn!("discarding malformed argument bundle: {e}");
            Arguments::new()
        }
    }
}

/// Success value of a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, uniffi::Enum)]
#[serde(untagged)]
pub enum CommandValue {
    /// No value (e.g. an unknown asset's filename).
    Null,
    /// Boolean result.
    Bool(bool),
    /// Integer result.
    Int(i64),
    /// String result.
    Text(String),
}

impl From<Option<String>> for CommandValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Null, Self::Text)
    }
}

/// The single response produced for a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, uniffi::Enum)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum CommandOutcome {
    /// The command succeeded.
    Success {
        /// Result value.
        value: CommandValue,
    },
    /// The command failed with a structured error.
    #[serde(rename = "error")]
    Failure {
        /// Wire code, e.g. `NO_PERMISSION`.
        code: String,
        /// Human readable message.
        message: String,
    },
    /// The command is not handled here.
    NotImplemented,
}

impl CommandOutcome {
    /// Serializes the outcome for JSON transports.
    #[must_use]
    pub fn to_json(&self) -> String {
        match serde_json::to_string(self) {
            Ok(json) => json,
            // unreachable for these variants
            Err(e) => format!(
                r#"{{"status":"error","code":"SERIALIZATION_FAILED","message":"{e}"}}"#
            ),
        }
    }
}

impl<T: Into<CommandValue>> From<Result<T, MediaBridgeError>> for CommandOutcome {
    fn from(result: Result<T, MediaBridgeError>) -> Self {
        match result {
            Ok(value) => Self::Success {
                value: value.into(),
            },
            Err(error) => Self::Failure {
                code: error.code().to_string(),
                message: error.message().to_string(),
            },
        }
    }
}

impl From<bool> for CommandValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for CommandValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<String> for CommandValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_names() {
        assert_eq!(Command::from_name("scanFile"), Some(Command::ScanFile));
        assert_eq!(
            Command::from_name("getOriginalFilename"),
            Some(Command::GetOriginalFilename)
        );
        assert_eq!(Command::from_name("getSdkInt"), Some(Command::GetSdkInt));
        assert_eq!(Command::from_name("getLegacyDcim"), Some(Command::GetLegacyDcim));
        assert_eq!(Command::from_name("foo"), None);
        assert_eq!(Command::from_name("SaveImage"), None);
        assert_eq!(Command::DeleteAssets.name(), "deleteAssets");
    }

    #[test]
    fn test_arguments_from_json() {
        let args = arguments_from_json(
            r#"{"path": "/tmp/a.jpg", "n": 3, "ids": ["a", "b"], "mixed": ["a", 1], "x": null}"#,
        );
        assert_eq!(string_arg(&args, "path").as_deref(), Some("/tmp/a.jpg"));
        assert_eq!(args.get("n"), Some(&ArgumentValue::Int(3)));
        assert_eq!(
            string_list_arg(&args, "ids"),
            Some(vec!["a".to_string(), "b".to_string()])
        );
        assert_eq!(args.get("mixed"), Some(&ArgumentValue::Other));
        assert_eq!(args.get("x"), Some(&ArgumentValue::Null));
    }

    #[test]
    fn test_wrong_type_reads_as_missing() {
        let args = arguments_from_json(r#"{"path": 42, "assetIds": "abc"}"#);
        assert_eq!(string_arg(&args, "path"), None);
        assert_eq!(string_list_arg(&args, "assetIds"), None);
    }

    #[test]
    fn test_non_object_bundle_is_empty() {
        assert!(arguments_from_json("null").is_empty());
        assert!(arguments_from_json("[1, 2]").is_empty());
        assert!(arguments_from_json("{not json").is_empty());
    }

    #[test]
    fn test_outcome_json() {
        let ok: CommandOutcome = Ok::<_, MediaBridgeError>("ABCD-1234".to_string()).into();
        assert_eq!(ok.to_json(), r#"{"status":"success","value":"ABCD-1234"}"#);

        let absent: CommandOutcome = Ok::<_, MediaBridgeError>(None::<String>).into();
        assert_eq!(absent.to_json(), r#"{"status":"success","value":null}"#);

        let err: CommandOutcome =
            Err::<bool, _>(MediaBridgeError::invalid_arguments("Missing assetIds")).into();
        assert_eq!(
            err.to_json(),
            r#"{"status":"error","code":"INVALID_ARGUMENTS","message":"Missing assetIds"}"#
        );

        assert_eq!(
            CommandOutcome::NotImplemented.to_json(),
            r#"{"status":"notImplemented"}"#
        );
    }
}
