//! Static plugin descriptors
//!
//! A mock plugin is described entirely by immutable tables: which plugin
//! family it stands in for, which import modules it publishes, and the exact
//! name and integer signature of every function in each module. The tables
//! are built in `const` context and live for the process lifetime; nothing in
//! them references mutable state.

use serde::Serialize;
use std::fmt;

use crate::types::AbiType;

/// The plugin family a mock stands in for.
///
/// Rendered into every diagnostic line so operators can tell which missing
/// plugin a degraded guest is hitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PluginFamily {
    WasiCrypto,
    WasiNn,
}

impl fmt::Display for PluginFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PluginFamily::WasiCrypto => write!(f, "WASI-Crypto"),
            PluginFamily::WasiNn => write!(f, "WASI-NN"),
        }
    }
}

/// One exported host function: name plus parameter widths.
///
/// The result is always a single `i32` status and is therefore not stored per
/// row. Parameters are opaque to the mock; none of them is ever interpreted
/// as a guest-memory offset.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FunctionDescriptor {
    pub name: &'static str,
    pub params: &'static [AbiType],
}

impl FunctionDescriptor {
    pub const fn new(name: &'static str, params: &'static [AbiType]) -> Self {
        Self { name, params }
    }

    /// Result types of every mocked function: one `i32`.
    pub fn results(&self) -> &'static [AbiType] {
        &[AbiType::I32]
    }
}

/// One import module exposed to the guest.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ModuleDescriptor {
    /// Import-module name the guest links against.
    pub name: &'static str,
    pub functions: &'static [FunctionDescriptor],
}

impl ModuleDescriptor {
    pub const fn new(name: &'static str, functions: &'static [FunctionDescriptor]) -> Self {
        Self { name, functions }
    }

    pub fn find(&self, function: &str) -> Option<&FunctionDescriptor> {
        self.functions.iter().find(|f| f.name == function)
    }
}

/// A complete mock plugin: family tag plus its ordered module tables.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PluginDescriptor {
    pub family: PluginFamily,
    pub modules: &'static [ModuleDescriptor],
}

impl PluginDescriptor {
    pub const fn new(family: PluginFamily, modules: &'static [ModuleDescriptor]) -> Self {
        Self { family, modules }
    }

    /// Total number of functions across all modules.
    pub fn function_count(&self) -> usize {
        self.modules.iter().map(|m| m.functions.len()).sum()
    }

    /// Iterate `(module, function)` pairs in table order.
    pub fn functions(&self) -> impl Iterator<Item = (&ModuleDescriptor, &FunctionDescriptor)> {
        self.modules
            .iter()
            .flat_map(|m| m.functions.iter().map(move |f| (m, f)))
    }

    pub fn find(&self, module: &str, function: &str) -> Option<&FunctionDescriptor> {
        self.modules
            .iter()
            .find(|m| m.name == module)
            .and_then(|m| m.find(function))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEN: FunctionDescriptor =
        FunctionDescriptor::new("array_output_len", &[AbiType::I32, AbiType::I32]);
    const MODULE: ModuleDescriptor = ModuleDescriptor::new("test_module", &[LEN]);
    const PLUGIN: PluginDescriptor = PluginDescriptor::new(PluginFamily::WasiCrypto, &[MODULE]);

    #[test]
    fn test_family_display_matches_diagnostic_tags() {
        assert_eq!(PluginFamily::WasiCrypto.to_string(), "WASI-Crypto");
        assert_eq!(PluginFamily::WasiNn.to_string(), "WASI-NN");
    }

    #[test]
    fn test_function_results_are_one_i32() {
        assert_eq!(LEN.results(), &[AbiType::I32]);
    }

    #[test]
    fn test_plugin_lookup() {
        assert_eq!(PLUGIN.function_count(), 1);
        assert!(PLUGIN.find("test_module", "array_output_len").is_some());
        assert!(PLUGIN.find("test_module", "state_roundtrip").is_none());
        assert!(PLUGIN.find("other_module", "array_output_len").is_none());
    }
}
