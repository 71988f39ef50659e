//! Mock WASI-Crypto and WASI-NN host plugins
//!
//! When a guest module is linked against the WASI-Crypto or WASI-NN host
//! APIs but the real plugin is not installed, instantiation normally fails on
//! the first unresolved import. This crate publishes stand-in host functions
//! with the exact names and integer signatures the real plugins export, so
//! such guests still link and run degraded: every call emits one diagnostic
//! line naming the missing plugin and returns the non-zero status `1`
//! ("unavailable") that both APIs reserve for errors.
//!
//! The mocks hold no state, never inspect their arguments, and never touch
//! guest memory. Returning a non-zero status (rather than `0` with zeroed
//! output buffers) ensures a status-checking guest propagates the failure
//! instead of mistaking silence for a signature or an inference result.
//!
//! # Example
//!
//! ```no_run
//! use wasmtime::{Engine, Linker, Module, Store};
//!
//! # fn main() -> anyhow::Result<()> {
//! let engine = Engine::default();
//! let mut linker: Linker<()> = Linker::new(&engine);
//! wasi_plugin_mocks::register_mock_plugins(&mut linker)?;
//!
//! let module = Module::from_file(&engine, "guest.wasm")?;
//! let mut store = Store::new(&engine, ());
//! let instance = linker.instantiate(&mut store, &module)?;
//! # Ok(())
//! # }
//! ```

pub mod crypto;
pub mod descriptor;
pub mod diagnostics;
pub mod nn;
pub mod registry;
pub mod types;

pub use crypto::WASI_CRYPTO_MOCK;
pub use descriptor::{FunctionDescriptor, ModuleDescriptor, PluginDescriptor, PluginFamily};
pub use diagnostics::{DiagnosticSink, OncePerPlugin, TracingSink};
pub use nn::WASI_NN_MOCK;
pub use registry::{register_crypto_mock, register_mock_plugins, register_nn_mock, register_plugin};
pub use types::{AbiType, MockError, MockResult, STATUS_UNAVAILABLE};
