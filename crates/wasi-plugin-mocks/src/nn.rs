//! WASI-NN mock surface
//!
//! A single flat import module covering model load, execution contexts,
//! input/output binding, and compute.

use crate::descriptor::{FunctionDescriptor, ModuleDescriptor, PluginDescriptor, PluginFamily};
use crate::types::AbiType::I32;

const fn f(
    name: &'static str,
    params: &'static [crate::types::AbiType],
) -> FunctionDescriptor {
    FunctionDescriptor::new(name, params)
}

pub const NN: ModuleDescriptor = ModuleDescriptor::new(
    "wasi_ephemeral_nn",
    &[
        f("load", &[I32, I32, I32, I32, I32]),
        f("init_execution_context", &[I32, I32]),
        f("set_input", &[I32, I32, I32]),
        f("get_output", &[I32, I32, I32, I32, I32]),
        f("compute", &[I32]),
    ],
);

/// The complete WASI-NN mock plugin.
pub static WASI_NN_MOCK: PluginDescriptor = PluginDescriptor::new(PluginFamily::WasiNn, &[NN]);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AbiType;

    #[test]
    fn test_surface() {
        assert_eq!(WASI_NN_MOCK.function_count(), 5);
        assert_eq!(WASI_NN_MOCK.modules.len(), 1);

        let compute = WASI_NN_MOCK.find("wasi_ephemeral_nn", "compute").unwrap();
        assert_eq!(compute.params, &[AbiType::I32]);
    }

    #[test]
    fn test_no_i64_params() {
        assert!(WASI_NN_MOCK
            .functions()
            .all(|(_, f)| f.params.iter().all(|p| *p == AbiType::I32)));
    }
}
