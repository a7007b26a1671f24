//! Processing API for lison sources
//!
//! This module selects what to extract from a source (symbols or the object tree)
//! and how to print it, from a `stage-format` string such as `token-json` or
//! `ast-treeviz`.
//!
//! ```rust,ignore
//! use lison::lison::processor::{process_source, ProcessingSpec};
//!
//! let spec = ProcessingSpec::from_string("ast-tag")?;
//! let output = process_source("(1 :k)", &spec)?;
//! ```

use crate::lison::formats::{FormatError, FormatRegistry};
use crate::lison::lexer::{tokenize_with_spans, Symbol};
use crate::lison::parser::parse_source;
use std::fs;
use std::ops::Range;
use std::path::Path;
use thiserror::Error;

/// Represents the processing stage (what data to extract)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessingStage {
    Token,
    Ast,
}

/// Represents the output format
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    /// One symbol per line
    Simple,
    /// Symbols with their byte spans as JSON
    Json,
    /// Any formatter from the registry, by name
    Registered(String),
}

/// Represents a complete processing specification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

/// Errors that can occur during processing
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProcessingError {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("Invalid stage: {0}")]
    InvalidStage(String),
    #[error("Invalid format type: {0}")]
    InvalidFormatType(String),
    #[error("IO error: {0}")]
    IoError(String),
    #[error(transparent)]
    Format(#[from] FormatError),
}

impl ProcessingSpec {
    /// Parse a format string like "token-simple" or "ast-treeviz"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        let (stage, format) = format_str
            .split_once('-')
            .ok_or_else(|| ProcessingError::InvalidFormat(format_str.to_string()))?;

        let stage = match stage {
            "token" => ProcessingStage::Token,
            "ast" => ProcessingStage::Ast,
            other => return Err(ProcessingError::InvalidStage(other.to_string())),
        };

        let format = match (&stage, format) {
            (ProcessingStage::Token, "simple") => OutputFormat::Simple,
            (ProcessingStage::Token, "json") => OutputFormat::Json,
            (ProcessingStage::Token, other) => {
                return Err(ProcessingError::InvalidFormatType(format!(
                    "Format '{other}' not supported for token stage (only 'simple' and 'json' are supported)"
                )))
            }
            (ProcessingStage::Ast, name) if FormatRegistry::global().contains(name) => {
                OutputFormat::Registered(name.to_string())
            }
            (ProcessingStage::Ast, other) => {
                return Err(ProcessingError::InvalidFormatType(format!(
                    "Format '{other}' not supported for AST stage (available: {})",
                    FormatRegistry::global()
                        .names()
                        .collect::<Vec<_>>()
                        .join(", ")
                )))
            }
        };

        Ok(ProcessingSpec { stage, format })
    }

    /// Get all available processing specifications
    pub fn available_specs() -> Vec<ProcessingSpec> {
        let mut specs = vec![
            ProcessingSpec {
                stage: ProcessingStage::Token,
                format: OutputFormat::Simple,
            },
            ProcessingSpec {
                stage: ProcessingStage::Token,
                format: OutputFormat::Json,
            },
        ];
        specs.extend(
            FormatRegistry::global()
                .names()
                .map(|name| ProcessingSpec {
                    stage: ProcessingStage::Ast,
                    format: OutputFormat::Registered(name.to_string()),
                }),
        );
        specs
    }

    /// The `stage-format` string this spec was parsed from
    pub fn name(&self) -> String {
        let stage = match self.stage {
            ProcessingStage::Token => "token",
            ProcessingStage::Ast => "ast",
        };
        let format = match &self.format {
            OutputFormat::Simple => "simple",
            OutputFormat::Json => "json",
            OutputFormat::Registered(name) => name.as_str(),
        };
        format!("{stage}-{format}")
    }
}

/// Process lison source text according to the given specification
pub fn process_source(source: &str, spec: &ProcessingSpec) -> Result<String, ProcessingError> {
    match (&spec.stage, &spec.format) {
        (ProcessingStage::Token, format) => format_symbols(&tokenize_with_spans(source), format),
        (ProcessingStage::Ast, OutputFormat::Registered(name)) => {
            let object = parse_source(source);
            Ok(FormatRegistry::global().serialize(&object, name)?)
        }
        (ProcessingStage::Ast, format) => Err(ProcessingError::InvalidFormatType(format!(
            "Format '{format:?}' only works with token stage"
        ))),
    }
}

/// Process a lison file according to the given specification
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    spec: &ProcessingSpec,
) -> Result<String, ProcessingError> {
    let content =
        fs::read_to_string(file_path).map_err(|e| ProcessingError::IoError(e.to_string()))?;
    process_source(&content, spec)
}

/// Format symbols according to the specified output format.
pub fn format_symbols(
    symbols: &[(Symbol, Range<usize>)],
    format: &OutputFormat,
) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Simple => {
            let mut result = String::new();
            for (symbol, _) in symbols {
                result.push_str(&symbol.to_string());
                result.push('\n');
            }
            Ok(result)
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(symbols)
                .map_err(|e| FormatError::SerializationError(e.to_string()))?;
            Ok(json)
        }
        OutputFormat::Registered(name) => Err(ProcessingError::InvalidFormatType(format!(
            "Format '{name}' only works with AST stage"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_token_specs() {
        assert_eq!(
            ProcessingSpec::from_string("token-simple").unwrap(),
            ProcessingSpec {
                stage: ProcessingStage::Token,
                format: OutputFormat::Simple,
            }
        );
        assert_eq!(
            ProcessingSpec::from_string("token-json").unwrap().format,
            OutputFormat::Json
        );
    }

    #[test]
    fn test_parse_ast_specs() {
        let spec = ProcessingSpec::from_string("ast-treeviz").unwrap();
        assert_eq!(spec.stage, ProcessingStage::Ast);
        assert_eq!(spec.format, OutputFormat::Registered("treeviz".to_string()));
    }

    #[test]
    fn test_invalid_specs() {
        assert_eq!(
            ProcessingSpec::from_string("ast"),
            Err(ProcessingError::InvalidFormat("ast".to_string()))
        );
        assert_eq!(
            ProcessingSpec::from_string("tree-tag"),
            Err(ProcessingError::InvalidStage("tree".to_string()))
        );
        assert!(matches!(
            ProcessingSpec::from_string("token-tag"),
            Err(ProcessingError::InvalidFormatType(_))
        ));
        assert!(matches!(
            ProcessingSpec::from_string("ast-simple"),
            Err(ProcessingError::InvalidFormatType(_))
        ));
    }

    #[test]
    fn test_available_specs_round_trip_names() {
        let specs = ProcessingSpec::available_specs();
        assert_eq!(specs.len(), 7);
        for spec in specs {
            assert_eq!(ProcessingSpec::from_string(&spec.name()).unwrap(), spec);
        }
    }

    #[test]
    fn test_process_token_simple() {
        let spec = ProcessingSpec::from_string("token-simple").unwrap();
        let output = process_source("(:a)", &spec).unwrap();
        assert_eq!(
            output,
            "<left-paren>\n<char::>\n<char:a>\n<right-paren>\n"
        );
    }

    #[test]
    fn test_process_token_json_has_spans() {
        let spec = ProcessingSpec::from_string("token-json").unwrap();
        let output = process_source("7", &spec).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(
            value,
            serde_json::json!([[{"Digit": "7"}, {"start": 0, "end": 1}]])
        );
    }

    #[test]
    fn test_process_ast_lison() {
        let spec = ProcessingSpec::from_string("ast-lison").unwrap();
        assert_eq!(
            process_source("(1   'a'\n:k)", &spec).unwrap(),
            "( 1 'a' :k ) "
        );
    }

    #[test]
    fn test_process_ast_on_malformed_source() {
        let spec = ProcessingSpec::from_string("ast-lison").unwrap();
        assert_eq!(process_source("(1", &spec).unwrap(), "ERROR ");
    }

    #[test]
    fn test_process_missing_file() {
        let spec = ProcessingSpec::from_string("ast-lison").unwrap();
        assert!(matches!(
            process_file("/definitely/not/here.lison", &spec),
            Err(ProcessingError::IoError(_))
        ));
    }
}
