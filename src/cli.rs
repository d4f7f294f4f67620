//! Argument handling and execution for the `dotwalk` binary.

use crate::error::CliError;
use clap::{Parser, Subcommand};
use dotwalk_path::{Limits, Query, TransformRegistry, delete_all};
use dotwalk_types::{Document, remove_empty_values};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Query, tombstone-delete and prune JSON documents with dotted paths.
#[derive(Parser, Debug)]
#[command(name = "dotwalk")]
#[command(version, about, long_about = None)]
#[command(after_help = "Environment:\n  DOTWALK_MAX_SEGMENTS   maximum number of segments in a path (default 64)\n  RUST_LOG               log filter, e.g. RUST_LOG=dotwalk_path=trace")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands for the dotwalk CLI
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Resolve a dotted path, e.g. `orders[0].lines[*].sku`
    Get {
        /// Input JSON file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Dotted path to resolve
        path: String,

        /// JSON value returned when the path resolves to nothing
        #[arg(long, value_name = "JSON")]
        default: Option<String>,

        /// Named transform applied to a truthy result (repeatable)
        #[arg(long = "then", value_name = "TRANSFORM")]
        transforms: Vec<String>,
    },
    /// Write `null` at one or more paths
    Delete {
        /// Input JSON file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Paths to tombstone, in order
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Strip nulls, empty strings and empty containers
    Prune {
        /// Input JSON file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

impl Command {
    pub fn file(&self) -> &PathBuf {
        match self {
            Command::Get { file, .. } | Command::Delete { file, .. } | Command::Prune { file } => {
                file
            }
        }
    }
}

/// Builds limits from a raw `DOTWALK_MAX_SEGMENTS` value, if one is set.
pub fn limits_from(raw: Option<String>) -> Result<Limits, CliError> {
    match raw {
        Some(raw) => raw
            .trim()
            .parse()
            .map(|max_segments| Limits { max_segments })
            .map_err(|_| CliError::Config(format!("Invalid DOTWALK_MAX_SEGMENTS '{}'", raw))),
        None => Ok(Limits::default()),
    }
}

/// Reads `DOTWALK_MAX_SEGMENTS`, falling back to the default limits.
pub fn limits_from_env() -> Result<Limits, CliError> {
    limits_from(env::var("DOTWALK_MAX_SEGMENTS").ok())
}

/// Runs a command against an already loaded document.
pub fn execute(
    command: &Command,
    document: &Document,
    limits: Limits,
    registry: &TransformRegistry,
) -> Result<Document, CliError> {
    match command {
        Command::Get {
            path,
            default,
            transforms,
            ..
        } => {
            let mut query = Query::new(path.as_str()).with_limits(limits);
            if let Some(raw) = default {
                query = query.with_default(serde_json::from_str::<Document>(raw)?);
            }
            for name in transforms {
                query = query.with_shared_transform(registry.get(name)?);
            }
            Ok(query.get(document)?)
        }
        Command::Delete { paths, .. } => Ok(delete_all(document, paths)?),
        Command::Prune { .. } => Ok(remove_empty_values(document.clone())),
    }
}

/// Loads the command's input file, runs it and renders pretty JSON.
pub fn run(command: &Command) -> Result<String, CliError> {
    let limits = limits_from_env()?;
    log::info!("Loading document from {}", command.file().display());
    let raw = fs::read_to_string(command.file())?;
    let document: Document = serde_json::from_str(&raw)?;
    let output = execute(command, &document, limits, &TransformRegistry::default())?;
    Ok(serde_json::to_string_pretty(&output)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(args: &[&str]) -> Result<Command, clap::Error> {
        Cli::try_parse_from(std::iter::once("dotwalk").chain(args.iter().copied()))
            .map(|cli| cli.command)
    }

    #[test]
    fn test_parse_get_with_options() {
        let command = parse(&[
            "get", "in.json", "a.b", "--default", "\"x\"", "--then", "upper", "--then", "trim",
        ])
        .unwrap();
        assert_eq!(
            command,
            Command::Get {
                file: PathBuf::from("in.json"),
                path: "a.b".into(),
                default: Some("\"x\"".into()),
                transforms: vec!["upper".into(), "trim".into()],
            }
        );
    }

    #[test]
    fn test_parse_delete_collects_paths() {
        let command = parse(&["delete", "in.json", "a[0]", "b.c"]).unwrap();
        assert_eq!(
            command,
            Command::Delete {
                file: PathBuf::from("in.json"),
                paths: vec!["a[0]".into(), "b.c".into()],
            }
        );
    }

    #[test]
    fn test_invalid_arguments_are_rejected() {
        for bad in [
            vec![],
            vec!["get"],
            vec!["get", "in.json"],
            vec!["delete", "in.json"],
            vec!["prune", "in.json", "extra"],
            vec!["frobnicate", "in.json"],
            vec!["get", "in.json", "a", "b"],
            vec!["get", "in.json", "a", "--then"],
        ] {
            assert!(parse(&bad).is_err(), "{:?}", bad);
        }
    }

    #[test]
    fn test_limits_from_raw_value() {
        assert_eq!(limits_from(None).unwrap(), Limits::default());
        assert_eq!(limits_from(Some(" 8 ".into())).unwrap(), Limits { max_segments: 8 });
        assert!(matches!(limits_from(Some("lots".into())), Err(CliError::Config(_))));
    }

    #[test]
    fn test_execute_get_and_delete() {
        let document = Document::from(json!({"a": [{"b": "x"}, {"b": "y"}]}));
        let registry = TransformRegistry::default();
        let get = parse(&["get", "f", "a[*].b", "--then", "first"]).unwrap();
        assert_eq!(
            execute(&get, &document, Limits::default(), &registry).unwrap(),
            Document::from("x")
        );
        let delete = parse(&["delete", "f", "a[0].b"]).unwrap();
        assert_eq!(
            execute(&delete, &document, Limits::default(), &registry).unwrap(),
            Document::from(json!({"a": [{"b": null}, {"b": "y"}]}))
        );
    }

    #[test]
    fn test_execute_rejects_bad_default_and_unknown_transform() {
        let registry = TransformRegistry::default();
        let bad_default = parse(&["get", "f", "a", "--default", "{not json"]).unwrap();
        let result = execute(&bad_default, &Document::mapping(), Limits::default(), &registry);
        assert!(matches!(result, Err(CliError::Json(_))));

        let unknown = parse(&["get", "f", "a", "--then", "shout"]).unwrap();
        let result = execute(&unknown, &Document::mapping(), Limits::default(), &registry);
        assert!(matches!(result, Err(CliError::Transform(_))));
    }

    #[test]
    fn test_execute_respects_limits() {
        let get = parse(&["get", "f", "a.b.c"]).unwrap();
        let result = execute(
            &get,
            &Document::mapping(),
            Limits { max_segments: 2 },
            &TransformRegistry::default(),
        );
        assert!(matches!(result, Err(CliError::Path(_))));
    }
}
