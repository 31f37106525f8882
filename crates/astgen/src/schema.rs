//! Grammar definitions for code generation.
//!
//! A grammar is an ordered list of variants, each a struct name plus its
//! field declarations. Field declarations are opaque `"name: Type"` strings
//! and are passed to the emitter untouched.
//!
//! Grammars are either built in code ([`expression_grammar`]) or loaded from
//! a TOML file:
//!
//! ```toml
//! base = "Expr"
//! imports = ["crate::token::Token"]
//!
//! [[variant]]
//! name = "Grouping"
//! fields = ["expression: Box<dyn Expr>"]
//! ```

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the shared abstraction when a grammar does not set one.
pub const DEFAULT_BASE: &str = "Expr";

/// Errors that can occur while loading a grammar file.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("failed to read grammar {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid grammar: {0}")]
    Parse(#[from] toml::de::Error),
}

/// One generated record type.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VariantDef {
    /// Struct name (e.g., "Binary")
    pub name: String,
    /// Field declarations, emitted verbatim in order
    #[serde(default)]
    pub fields: Vec<String>,
}

impl VariantDef {
    pub fn new<N, I, F>(name: N, fields: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = F>,
        F: Into<String>,
    {
        Self {
            name: name.into(),
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }
}

/// Root schema: the shared abstraction plus its variants.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Grammar {
    /// Name of the shared marker trait
    #[serde(default = "default_base")]
    pub base: String,
    /// Emit `pub` on the trait, structs and fields
    #[serde(default)]
    pub public: bool,
    /// `use` paths emitted ahead of the trait
    #[serde(default)]
    pub imports: Vec<String>,
    /// Variants in emission order
    #[serde(default)]
    pub variant: Vec<VariantDef>,
}

fn default_base() -> String {
    DEFAULT_BASE.to_string()
}

impl Grammar {
    /// Create a private grammar with no imports.
    pub fn new(base: impl Into<String>, variant: Vec<VariantDef>) -> Self {
        Self {
            base: base.into(),
            public: false,
            imports: Vec::new(),
            variant,
        }
    }

    /// Parse a grammar from TOML source.
    pub fn from_toml_str(source: &str) -> Result<Self, SchemaError> {
        Ok(toml::from_str(source)?)
    }

    /// Load a grammar from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SchemaError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| SchemaError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Load the grammar shipped with this crate (grammar/expr.toml).
    pub fn load_default() -> Result<Self, SchemaError> {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("grammar")
            .join("expr.toml");
        Self::from_file(path)
    }
}

/// The expression grammar: Binary, Grouping, Literal and Unary.
pub fn expression_grammar() -> Grammar {
    Grammar::new(
        DEFAULT_BASE,
        vec![
            VariantDef::new(
                "Binary",
                ["left: Box<dyn Expr>", "operator: Token", "right: Box<dyn Expr>"],
            ),
            VariantDef::new("Grouping", ["expression: Box<dyn Expr>"]),
            VariantDef::new("Literal", ["value: Box<dyn Literal>"]),
            VariantDef::new("Unary", ["operator: Token", "right: Box<dyn Expr>"]),
        ],
    )
}
