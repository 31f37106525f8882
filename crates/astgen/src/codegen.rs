//! Code generation from a grammar.
//!
//! Emits one empty marker trait plus one struct per variant, each with an
//! empty `impl` of the trait. Output is a list of fragments, each followed
//! by a single blank line:
//!
//! ```text
//! trait Expr {}
//!
//! struct Grouping {
//!     expression: Box<dyn Expr>,
//! }
//! impl Expr for Grouping {}
//!
//! ```

use crate::schema::{Grammar, VariantDef};
use tracing::debug;

const INDENT: &str = "    ";

/// Generate the declarations for `grammar`.
pub fn generate(grammar: &Grammar) -> String {
    let vis = visibility(grammar.public);
    let mut fragments = Vec::with_capacity(grammar.variant.len() + 2);

    if !grammar.imports.is_empty() {
        fragments.push(imports_fragment(&grammar.imports));
    }
    fragments.push(format!("{vis}trait {} {{}}\n", grammar.base));

    for variant in &grammar.variant {
        debug!(variant = %variant.name, fields = variant.fields.len(), "emitting variant");
        fragments.push(variant_fragment(&grammar.base, vis, variant));
    }

    join_fragments(&fragments)
}

/// Generate private declarations for `variants` under the trait `base`.
pub fn define_ast(base: &str, variants: &[VariantDef]) -> String {
    generate(&Grammar::new(base, variants.to_vec()))
}

fn visibility(public: bool) -> &'static str {
    if public { "pub " } else { "" }
}

fn imports_fragment(imports: &[String]) -> String {
    imports.iter().map(|path| format!("use {path};\n")).collect()
}

/// Struct declaration followed by its empty conformance block.
fn variant_fragment(base: &str, vis: &str, variant: &VariantDef) -> String {
    let mut out = format!("{vis}struct {} {{\n", variant.name);
    for field in &variant.fields {
        out.push_str(INDENT);
        out.push_str(vis);
        out.push_str(field);
        out.push_str(",\n");
    }
    out.push_str("}\n");
    out.push_str(&format!("impl {base} for {} {{}}\n", variant.name));
    out
}

fn join_fragments(fragments: &[String]) -> String {
    let mut out = String::new();
    for fragment in fragments {
        out.push_str(fragment);
        out.push('\n');
    }
    out
}
