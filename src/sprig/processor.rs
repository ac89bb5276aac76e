//! Processing API for sprig sources
//!
//! This module provides an API for processing sprig source text with
//! different stages (token, ast) and output formats (simple, json, sexpr).
//! A stage and format pair is addressed by a format string such as
//! `token-simple` or `ast-sexpr`; the command-line binary passes these
//! through unchanged.

use std::fmt;

use crate::sprig::lexer::{tokenize_with_spans, Token};
use crate::sprig::parser::{parse_source, ParseError};

/// Represents the processing stage (what data to extract)
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingStage {
    Token,
    Ast,
}

/// Represents the output format
#[derive(Debug, Clone, PartialEq)]
pub enum OutputFormat {
    Simple,
    Json,
    Sexpr,
}

/// Represents a complete processing specification
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

impl ProcessingSpec {
    /// Parse a format string like "token-simple" or "ast-sexpr"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        let parts: Vec<&str> = format_str.split('-').collect();
        if parts.len() != 2 {
            return Err(ProcessingError::InvalidFormat(format_str.to_string()));
        }

        let stage = match parts[0] {
            "token" => ProcessingStage::Token,
            "ast" => ProcessingStage::Ast,
            _ => return Err(ProcessingError::InvalidStage(parts[0].to_string())),
        };

        let format = match parts[1] {
            "simple" => OutputFormat::Simple,
            "json" => OutputFormat::Json,
            "sexpr" => OutputFormat::Sexpr,
            _ => return Err(ProcessingError::InvalidFormatType(parts[1].to_string())),
        };

        // Validate stage/format compatibility
        match (&stage, &format) {
            (ProcessingStage::Token, OutputFormat::Sexpr) => {
                return Err(ProcessingError::InvalidFormatType(
                    "Format 'sexpr' only works with the ast stage".to_string(),
                ))
            }
            (ProcessingStage::Ast, OutputFormat::Simple) => {
                return Err(ProcessingError::InvalidFormatType(
                    "Format 'simple' only works with the token stage".to_string(),
                ))
            }
            _ => {}
        }

        Ok(ProcessingSpec { stage, format })
    }

    /// Get all valid processing specifications
    pub fn available_specs() -> Vec<ProcessingSpec> {
        vec![
            ProcessingSpec {
                stage: ProcessingStage::Token,
                format: OutputFormat::Simple,
            },
            ProcessingSpec {
                stage: ProcessingStage::Token,
                format: OutputFormat::Json,
            },
            ProcessingSpec {
                stage: ProcessingStage::Ast,
                format: OutputFormat::Sexpr,
            },
            ProcessingSpec {
                stage: ProcessingStage::Ast,
                format: OutputFormat::Json,
            },
        ]
    }
}

/// Errors that can occur during processing
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingError {
    InvalidFormat(String),
    InvalidStage(String),
    InvalidFormatType(String),
    ParseFailed(String),
    SerializationFailed(String),
}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::InvalidFormat(format) => write!(f, "Invalid format: {format}"),
            ProcessingError::InvalidStage(stage) => write!(f, "Invalid stage: {stage}"),
            ProcessingError::InvalidFormatType(format_type) => {
                write!(f, "Invalid format type: {format_type}")
            }
            ProcessingError::ParseFailed(message) => write!(f, "Syntax error: {message}"),
            ProcessingError::SerializationFailed(message) => {
                write!(f, "Serialization failed: {message}")
            }
        }
    }
}

impl std::error::Error for ProcessingError {}

impl From<ParseError> for ProcessingError {
    fn from(error: ParseError) -> Self {
        ProcessingError::ParseFailed(error.message().to_string())
    }
}

/// Process sprig source text according to the given format string
pub fn process_source(source: &str, format_str: &str) -> Result<String, ProcessingError> {
    let spec = ProcessingSpec::from_string(format_str)?;

    match spec.stage {
        ProcessingStage::Token => {
            let tokens = tokenize_with_spans(source);
            format_tokens(source, &tokens, &spec.format)
        }
        ProcessingStage::Ast => {
            let exprs = parse_source(source)?;
            match spec.format {
                OutputFormat::Sexpr => Ok(exprs
                    .iter()
                    .map(|expr| expr.to_string())
                    .collect::<Vec<_>>()
                    .join("\n")),
                OutputFormat::Json => serde_json::to_string_pretty(&exprs)
                    .map_err(|e| ProcessingError::SerializationFailed(e.to_string())),
                OutputFormat::Simple => Err(ProcessingError::InvalidFormatType(
                    "Format 'simple' only works with the token stage".to_string(),
                )),
            }
        }
    }
}

/// Format lexed tokens according to the specified format
fn format_tokens(
    source: &str,
    tokens: &[(Token, logos::Span)],
    format: &OutputFormat,
) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Simple => {
            let mut result = String::new();
            for (token, span) in tokens {
                result.push_str(&format!(
                    "{}..{}\t{:?}\t{}\n",
                    span.start,
                    span.end,
                    token,
                    &source[span.clone()]
                ));
            }
            Ok(result)
        }
        OutputFormat::Json => {
            let records: Vec<(Token, String)> = tokens
                .iter()
                .map(|(token, span)| (token.clone(), source[span.clone()].to_string()))
                .collect();
            serde_json::to_string_pretty(&records)
                .map_err(|e| ProcessingError::SerializationFailed(e.to_string()))
        }
        OutputFormat::Sexpr => Err(ProcessingError::InvalidFormatType(
            "Format 'sexpr' only works with the ast stage".to_string(),
        )),
    }
}

/// Get all valid format strings
pub fn available_formats() -> Vec<String> {
    ProcessingSpec::available_specs()
        .into_iter()
        .map(|spec| {
            format!(
                "{}-{}",
                match spec.stage {
                    ProcessingStage::Token => "token",
                    ProcessingStage::Ast => "ast",
                },
                match spec.format {
                    OutputFormat::Simple => "simple",
                    OutputFormat::Json => "json",
                    OutputFormat::Sexpr => "sexpr",
                }
            )
        })
        .collect()
}
