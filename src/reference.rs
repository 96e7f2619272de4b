// src/reference.rs

//! Command reference parsing.
//!
//! A command reference is a `namespace/name@version` segment somewhere in the
//! argument vector; everything after it belongs to the command being run.
//! The version component may be a concrete semantic version or a symbolic
//! tag such as `latest` — this module does not interpret it.

use crate::errors::{Result, SdCmdError};

/// A parsed command reference plus where it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRef {
    pub namespace: String,
    pub name: String,
    pub version: String,

    /// Index into the raw argument vector where the reference segment sits.
    /// Arguments forwarded to the command itself start at `arg_index + 1`.
    pub arg_index: usize,
}

impl CommandRef {
    /// The trailing arguments that belong to the command being run.
    pub fn forwarded_args<'a>(&self, raw_args: &'a [String]) -> &'a [String] {
        &raw_args[self.arg_index + 1..]
    }
}

/// Split a single `namespace/name@version` segment.
///
/// Returns `None` unless the segment contains exactly one `/`, exactly one
/// `@` after it, and all three components are non-empty.
fn split_reference(segment: &str) -> Option<(&str, &str, &str)> {
    let (namespace, rest) = segment.split_once('/')?;
    if namespace.is_empty() || namespace.contains('@') || rest.contains('/') {
        return None;
    }
    let (name, version) = rest.split_once('@')?;
    if name.is_empty() || version.is_empty() || version.contains('@') {
        return None;
    }
    Some((namespace, name, version))
}

/// Locate the first argument that parses as a command reference.
///
/// Pure; on failure no log session or other side effect has happened yet.
pub fn parse_args(raw_args: &[String]) -> Result<CommandRef> {
    if raw_args.is_empty() {
        return Err(SdCmdError::MalformedReference(
            "no arguments given".to_string(),
        ));
    }

    for (arg_index, arg) in raw_args.iter().enumerate() {
        if let Some((namespace, name, version)) = split_reference(arg) {
            return Ok(CommandRef {
                namespace: namespace.to_string(),
                name: name.to_string(),
                version: version.to_string(),
                arg_index,
            });
        }
    }

    Err(SdCmdError::MalformedReference(format!(
        "no namespace/name@version segment in '{}'",
        raw_args.join(" ")
    )))
}
