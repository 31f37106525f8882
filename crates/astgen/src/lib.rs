//! Expression-tree definition generator.
//!
//! Turns a grammar (an ordered list of variant names and field
//! declarations) into Rust source: one empty marker trait and one struct
//! per variant that implements it.
//!
//! Example:
//! ```
//! use astgen::{VariantDef, define_ast};
//!
//! let code = define_ast("Expr", &[VariantDef::new("Grouping", ["expression: Box<dyn Expr>"])]);
//! assert!(code.contains("impl Expr for Grouping {}"));
//! ```

pub mod codegen;
pub mod output;
pub mod schema;

pub use codegen::{define_ast, generate};
pub use output::{DEFAULT_OUTPUT, OutputError, generate_to_file, write_new};
pub use schema::{Grammar, SchemaError, VariantDef, expression_grammar};

#[cfg(test)]
mod tests;
