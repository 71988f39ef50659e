//! Registration adapter
//!
//! Publishes the descriptor tables to a wasmtime [`Linker`] so that a guest
//! importing the canonical module names binds against the mocks. Each bound
//! closure treats its arguments as opaque scalars, reports once through the
//! diagnostic sink, and writes the fixed unavailable status into its single
//! result slot. It never traps and never touches guest memory.

use std::sync::Arc;
use tracing::debug;
use wasmtime::{FuncType, Linker, Val};

use crate::crypto::WASI_CRYPTO_MOCK;
use crate::descriptor::PluginDescriptor;
use crate::diagnostics::{DiagnosticSink, TracingSink};
use crate::nn::WASI_NN_MOCK;
use crate::types::{MockError, MockResult, STATUS_UNAVAILABLE};

/// Bind every function of `plugin` into `linker`, reporting invocations
/// through `sink`.
///
/// Only the names enumerated in the descriptor tables are bound; resolution
/// of any other import still fails at instantiation time.
pub fn register_plugin<T: 'static>(
    linker: &mut Linker<T>,
    plugin: &PluginDescriptor,
    sink: Arc<dyn DiagnosticSink>,
) -> MockResult<()> {
    let family = plugin.family;

    for (module, function) in plugin.functions() {
        let ty = FuncType::new(
            linker.engine(),
            function.params.iter().map(|p| p.val_type()),
            function.results().iter().map(|r| r.val_type()),
        );

        let sink = Arc::clone(&sink);
        linker
            .func_new(module.name, function.name, ty, move |_caller, _params, results| {
                sink.plugin_unavailable(family);
                results[0] = Val::I32(STATUS_UNAVAILABLE);
                Ok(())
            })
            .map_err(|e| MockError::Registration {
                module: module.name.to_string(),
                name: function.name.to_string(),
                reason: e.to_string(),
            })?;
    }

    debug!(
        "Registered {} mock functions for {}",
        plugin.function_count(),
        family
    );
    Ok(())
}

/// Register the WASI-Crypto mock with a custom sink.
pub fn register_crypto_mock<T: 'static>(
    linker: &mut Linker<T>,
    sink: Arc<dyn DiagnosticSink>,
) -> MockResult<()> {
    register_plugin(linker, &WASI_CRYPTO_MOCK, sink)
}

/// Register the WASI-NN mock with a custom sink.
pub fn register_nn_mock<T: 'static>(
    linker: &mut Linker<T>,
    sink: Arc<dyn DiagnosticSink>,
) -> MockResult<()> {
    register_plugin(linker, &WASI_NN_MOCK, sink)
}

/// Register both mock plugins with the default per-call [`TracingSink`].
pub fn register_mock_plugins<T: 'static>(linker: &mut Linker<T>) -> MockResult<()> {
    let sink: Arc<dyn DiagnosticSink> = Arc::new(TracingSink);
    register_crypto_mock(linker, Arc::clone(&sink))?;
    register_nn_mock(linker, sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasmtime::{Engine, Store};

    #[test]
    fn test_register_both_plugins() {
        let engine = Engine::default();
        let mut linker: Linker<()> = Linker::new(&engine);
        register_mock_plugins(&mut linker).unwrap();

        let mut store = Store::new(&engine, ());
        for plugin in [&WASI_CRYPTO_MOCK, &WASI_NN_MOCK] {
            for (module, function) in plugin.functions() {
                let ext = linker.get(&mut store, module.name, function.name);
                assert!(ext.is_some(), "{}.{} not bound", module.name, function.name);
            }
        }
    }

    #[test]
    fn test_duplicate_registration_is_an_error() {
        let engine = Engine::default();
        let mut linker: Linker<()> = Linker::new(&engine);
        let sink: Arc<dyn DiagnosticSink> = Arc::new(TracingSink);

        register_crypto_mock(&mut linker, Arc::clone(&sink)).unwrap();
        let err = register_crypto_mock(&mut linker, sink).unwrap_err();
        assert!(matches!(err, MockError::Registration { .. }));
    }

    #[test]
    fn test_unlisted_name_is_not_bound() {
        let engine = Engine::default();
        let mut linker: Linker<()> = Linker::new(&engine);
        register_mock_plugins(&mut linker).unwrap();

        let mut store = Store::new(&engine, ());
        assert!(linker
            .get(&mut store, "wasi_ephemeral_crypto_symmetric", "state_roundtrip")
            .is_none());
    }
}
