//! Source printer for ECMAScript syntax trees.
//!
//! Renders a borrowed tree into JavaScript text in one of two modes:
//! - compact: no optional whitespace, line breaks or comments
//! - formatted: indentation, line breaks chosen by `ListFormat` policies and
//!   by the source layout recorded in node spans
//!
//! Entry points live in [`printer`].

// Output buffer with lazy indentation and position tracking
pub mod source_writer;
pub use source_writer::{SourcePosition, SourceWriter};

// Per-production list layout policies
pub mod list_format;
pub use list_format::{Brackets, Delimiter, LineMode, ListFormat};

// Token adjacency analysis (mandatory spaces)
pub mod spacing;

// Error taxonomy
pub mod error;
pub use error::{EmitError, EmitResult};

// Node dispatcher
pub mod emitter;

// Public printing API
pub mod printer;
pub use printer::{
    EmitMark, PrintOptions, PrintOutput, Printer, print, print_expr, print_stmt, print_to_string,
    print_with_comments,
};
