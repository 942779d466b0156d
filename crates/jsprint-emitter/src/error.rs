//! Emit error taxonomy.
//!
//! Printing either completes or fails with one of these; no partial output is
//! returned.

use jsprint_ast::NodeKind;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmitError {
    /// The tree contains a node kind the printer does not render.
    #[error("not implemented yet: codegen of {kind}")]
    UnimplementedNodeKind { kind: NodeKind },

    /// The tree breaks an invariant the printer relies on.
    #[error("input contract violation: {message}")]
    InputContractViolation { message: String },

    /// Internal printer defect.
    #[error("printer invariant violated: {message}")]
    InvariantViolation { message: String },
}

impl EmitError {
    pub fn unimplemented(kind: NodeKind) -> Self {
        tracing::trace!(%kind, "unimplemented node kind");
        EmitError::UnimplementedNodeKind { kind }
    }

    pub fn contract(message: impl Into<String>) -> Self {
        let message = message.into();
        tracing::trace!(%message, "input contract violation");
        EmitError::InputContractViolation { message }
    }

    pub fn invariant(message: impl Into<String>) -> Self {
        EmitError::InvariantViolation {
            message: message.into(),
        }
    }
}

pub type EmitResult<T = ()> = Result<T, EmitError>;
