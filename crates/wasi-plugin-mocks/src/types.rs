//! Core ABI types
//!
//! Scalar types and errors shared by the descriptor tables and the
//! registration adapter.

use serde::Serialize;
use std::fmt;
use thiserror::Error;
use wasmtime::ValType;

/// Status code returned by every mock host function.
///
/// Both guest APIs share the same wire convention: `0` is success, any
/// non-zero value is an error. The mocks always report `1` so that guests
/// which check statuses propagate failure instead of treating zeroed output
/// buffers as valid key material or inference results. Do not change this to
/// `0`, and do not widen it.
pub const STATUS_UNAVAILABLE: i32 = 1;

/// Integer widths that appear in the mocked ABIs.
///
/// Every parameter of every mocked function is one of these two, and every
/// function returns a single [`AbiType::I32`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AbiType {
    I32,
    I64,
}

impl AbiType {
    /// The matching wasmtime value type.
    pub fn val_type(self) -> ValType {
        match self {
            AbiType::I32 => ValType::I32,
            AbiType::I64 => ValType::I64,
        }
    }
}

impl fmt::Display for AbiType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbiType::I32 => write!(f, "i32"),
            AbiType::I64 => write!(f, "i64"),
        }
    }
}

/// Errors raised while publishing mock plugins to a linker.
#[derive(Debug, Error)]
pub enum MockError {
    #[error("Failed to register mock {module}.{name}: {reason}")]
    Registration {
        module: String,
        name: String,
        reason: String,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for registration operations.
pub type MockResult<T> = Result<T, MockError>;
