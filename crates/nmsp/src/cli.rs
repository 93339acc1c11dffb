//! Core logic behind the `nmsp` binary.
//!
//! - `nmsp get <PATH>`                 — print the value at a path
//! - `nmsp extend [--at PATH] <JSON>`  — deep-merge JSON into the document
//! - `nmsp skeleton <PATH>`            — print the skeleton of a path
//!
//! Documents are read from stdin and written as pretty JSON. An empty
//! document counts as `{}` for every command.

use std::io::Read;

use clap::{Parser, Subcommand};
use log::{debug, LevelFilter};
use serde_json::Value;
use thiserror::Error;

use crate::extend::{extend_at, extend_value};
use crate::resolve::{at_path, from_path};
use crate::validate::validate_path;
use crate::PathError;

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid path: {0}")]
    Path(#[from] PathError),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Document is not an object")]
    NotAnObject,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// ── Arguments ─────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "nmsp", version, about = "Dotted-path lookup and deep merge for JSON")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print the value at PATH in the document read from stdin.
    Get {
        #[arg(value_name = "PATH")]
        path: String,
    },
    /// Deep-merge SOURCE into the document read from stdin.
    Extend {
        /// JSON object to merge in.
        #[arg(value_name = "SOURCE")]
        source: String,
        /// Merge at this path instead of the document root.
        #[arg(long, value_name = "PATH")]
        at: Option<String>,
    },
    /// Print the nested empty objects implied by PATH.
    Skeleton {
        #[arg(value_name = "PATH")]
        path: String,
    },
}

pub fn get_log_level_from_verbose(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Read the stdin document, if the command takes one.
pub fn read_input(command: &Command, mut reader: impl Read) -> Result<String, CliError> {
    let mut buf = String::new();
    if !matches!(command, Command::Skeleton { .. }) {
        reader.read_to_string(&mut buf)?;
    }
    Ok(buf)
}

/// Run a command against `input` (the stdin document) and return the output.
pub fn run(command: &Command, input: &str) -> Result<String, CliError> {
    debug!("running {command:?}");
    match command {
        Command::Get { path } => lookup_path(input.trim(), path),
        Command::Extend { source, at } => merge(input.trim(), source, at.as_deref()),
        Command::Skeleton { path } => skeleton(path),
    }
}

fn parse_document(json: &str) -> Result<Value, CliError> {
    if json.is_empty() {
        return Ok(Value::Object(Default::default()));
    }
    Ok(serde_json::from_str(json)?)
}

// ── get ───────────────────────────────────────────────────────────────────

/// Look up `path` in a JSON document and return the value as pretty JSON.
pub fn lookup_path(json: &str, path: &str) -> Result<String, CliError> {
    validate_path(path)?;
    let doc = parse_document(json)?;
    let root = doc.as_object().ok_or(CliError::NotAnObject)?;
    let found = at_path(path, root).ok_or_else(|| CliError::NotFound(path.to_string()))?;
    Ok(serde_json::to_string_pretty(found)?)
}

// ── extend ────────────────────────────────────────────────────────────────

/// Deep-merge `source` into `json`, optionally at `at`, and return the result.
pub fn merge(json: &str, source: &str, at: Option<&str>) -> Result<String, CliError> {
    let mut doc = parse_document(json)?;
    let source: Value = serde_json::from_str(source)?;
    match at {
        Some(path) => {
            validate_path(path)?;
            let root = doc.as_object_mut().ok_or(CliError::NotAnObject)?;
            let source = source.as_object().ok_or(CliError::NotAnObject)?;
            extend_at(root, path, source);
        }
        None => extend_value(&mut doc, &source),
    }
    Ok(serde_json::to_string_pretty(&doc)?)
}

// ── skeleton ──────────────────────────────────────────────────────────────

/// Return the skeleton of `path` as pretty JSON.
pub fn skeleton(path: &str) -> Result<String, CliError> {
    validate_path(path)?;
    Ok(serde_json::to_string_pretty(&Value::Object(from_path(path)))?)
}
