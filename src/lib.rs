//! jsprint: render ECMAScript syntax trees back into source text.
//!
//! The heavy lifting lives in the workspace crates; this facade re-exports
//! their public surface and adds entry points that take the tree as JSON.
//!
//! ```no_run
//! use jsprint::{PrintOptions, print_json};
//!
//! let json = r#"{"type": "Script", "body": [{"type": "Identifier", "value": "a"}]}"#;
//! let output = print_json(json, PrintOptions::compact()).unwrap();
//! assert_eq!(output.code, "a;");
//! ```

use tracing::debug;

pub use jsprint_ast as ast;
pub use jsprint_common as common;
pub use jsprint_emitter as emitter;

pub use jsprint_ast::{NodeKind, Program};
pub use jsprint_common::{Comment, CommentKind, Comments, Span, Spanned};
pub use jsprint_emitter::{
    EmitError, EmitMark, EmitResult, ListFormat, PrintOptions, PrintOutput, Printer,
    SourcePosition, SourceWriter, print, print_expr, print_stmt, print_to_string,
    print_with_comments,
};

// Subscriber setup for hosts and debugging sessions
pub mod tracing_config;

// =============================================================================
// JSON entry points
// =============================================================================

/// Read a program from the tagged JSON tree shape
/// (`{"type": "Module", "body": [...]}`).
///
/// Malformed JSON and unknown node tags are reported as input contract
/// violations, the same way a malformed tree is.
pub fn parse_program_json(json: &str) -> EmitResult<Program> {
    serde_json::from_str(json)
        .map_err(|err| EmitError::contract(format!("malformed tree JSON: {err}")))
}

/// Print a program given as JSON.
pub fn print_json(json: &str, options: PrintOptions) -> EmitResult<PrintOutput> {
    let program = parse_program_json(json)?;
    debug!(bytes = json.len(), "parsed tree JSON");
    print(&program, options)
}

/// Print a program given as JSON, re-attaching the comments found in the
/// `source` text it was parsed from.
pub fn print_json_with_source(
    json: &str,
    source: &str,
    options: PrintOptions,
) -> EmitResult<PrintOutput> {
    let program = parse_program_json(json)?;
    let comments = Comments::from_source(source);
    debug!(
        bytes = json.len(),
        comments = comments.len(),
        "parsed tree JSON with source"
    );
    print_with_comments(&program, &comments, options)
}
