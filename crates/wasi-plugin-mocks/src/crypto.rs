//! WASI-Crypto mock surface
//!
//! The full import surface the real WASI-Crypto plugin publishes, spread over
//! five import modules. Names and parameter widths must stay byte-for-byte
//! identical to the real plugin's ABI; every function returns one `i32`.
//!
//! The `state_open`/`state_close` names appear in both the signatures and the
//! symmetric tables with different arities, which is why each sub-API is its
//! own import module.

use crate::descriptor::{FunctionDescriptor, ModuleDescriptor, PluginDescriptor, PluginFamily};
use crate::types::AbiType::{I32, I64};

const fn f(
    name: &'static str,
    params: &'static [crate::types::AbiType],
) -> FunctionDescriptor {
    FunctionDescriptor::new(name, params)
}

/// Array-output streaming, options, and secrets-manager functions.
pub const COMMON: ModuleDescriptor = ModuleDescriptor::new(
    "wasi_ephemeral_crypto_common",
    &[
        f("array_output_len", &[I32, I32]),
        f("array_output_pull", &[I32, I32, I32, I32]),
        f("options_open", &[I32, I32]),
        f("options_close", &[I32]),
        f("options_set", &[I32, I32, I32, I32, I32]),
        f("options_set_u64", &[I32, I32, I32, I64]),
        f("options_set_guest_buffer", &[I32, I32, I32, I32, I32]),
        f("secrets_manager_open", &[I32, I32]),
        f("secrets_manager_close", &[I32]),
        f("secrets_manager_invalidate", &[I32, I32, I32, I64]),
    ],
);

/// Keypair, public-key, and secret-key management.
pub const ASYMMETRIC_COMMON: ModuleDescriptor = ModuleDescriptor::new(
    "wasi_ephemeral_crypto_asymmetric_common",
    &[
        f("keypair_generate", &[I32, I32, I32, I32, I32]),
        f("keypair_import", &[I32, I32, I32, I32, I32, I32, I32]),
        f("keypair_generate_managed", &[I32, I32, I32, I32, I32, I32]),
        f("keypair_store_managed", &[I32, I32, I32, I32]),
        f("keypair_replace_managed", &[I32, I32, I32, I32]),
        f("keypair_id", &[I32, I32, I32, I32, I32]),
        f("keypair_from_id", &[I32, I32, I32, I64, I32]),
        f("keypair_from_pk_and_sk", &[I32, I32, I32]),
        f("keypair_export", &[I32, I32, I32]),
        f("keypair_publickey", &[I32, I32]),
        f("keypair_secretkey", &[I32, I32]),
        f("keypair_close", &[I32]),
        f("publickey_import", &[I32, I32, I32, I32, I32, I32, I32]),
        f("publickey_export", &[I32, I32, I32]),
        f("publickey_verify", &[I32]),
        f("publickey_from_secretkey", &[I32, I32]),
        f("publickey_close", &[I32]),
        f("secretkey_import", &[I32, I32, I32, I32, I32, I32, I32]),
        f("secretkey_export", &[I32, I32, I32]),
        f("secretkey_close", &[I32]),
    ],
);

/// Key exchange: Diffie-Hellman and key encapsulation.
pub const KX: ModuleDescriptor = ModuleDescriptor::new(
    "wasi_ephemeral_crypto_kx",
    &[
        f("dh", &[I32, I32, I32]),
        f("encapsulate", &[I32, I32, I32]),
        f("decapsulate", &[I32, I32, I32, I32]),
    ],
);

/// Signature objects and sign/verify state machines.
pub const SIGNATURES: ModuleDescriptor = ModuleDescriptor::new(
    "wasi_ephemeral_crypto_signatures",
    &[
        f("export", &[I32, I32, I32]),
        f("import", &[I32, I32, I32, I32, I32, I32]),
        f("state_open", &[I32, I32]),
        f("state_update", &[I32, I32, I32]),
        f("state_sign", &[I32, I32]),
        f("state_close", &[I32]),
        f("verification_state_open", &[I32, I32]),
        f("verification_state_update", &[I32, I32, I32]),
        f("verification_state_verify", &[I32, I32]),
        f("verification_state_close", &[I32]),
        f("close", &[I32]),
    ],
);

/// Symmetric keys, AEAD/MAC state machines, and tags.
pub const SYMMETRIC: ModuleDescriptor = ModuleDescriptor::new(
    "wasi_ephemeral_crypto_symmetric",
    &[
        f("key_generate", &[I32, I32, I32, I32]),
        f("key_import", &[I32, I32, I32, I32, I32]),
        f("key_export", &[I32, I32]),
        f("key_close", &[I32]),
        f("key_generate_managed", &[I32, I32, I32, I32, I32]),
        f("key_store_managed", &[I32, I32, I32, I32]),
        f("key_replace_managed", &[I32, I32, I32, I32]),
        f("key_id", &[I32, I32, I32, I32, I32]),
        f("key_from_id", &[I32, I32, I32, I64, I32]),
        f("state_open", &[I32, I32, I32, I32, I32]),
        f("state_clone", &[I32, I32]),
        f("state_options_get", &[I32, I32, I32, I32, I32, I32]),
        f("state_options_get_u64", &[I32, I32, I32, I32]),
        f("state_close", &[I32]),
        f("state_absorb", &[I32, I32, I32]),
        f("state_squeeze", &[I32, I32, I32]),
        f("state_squeeze_tag", &[I32, I32]),
        f("state_squeeze_key", &[I32, I32, I32, I32]),
        f("state_max_tag_len", &[I32, I32]),
        f("state_encrypt", &[I32, I32, I32, I32, I32, I32]),
        f("state_encrypt_detached", &[I32, I32, I32, I32, I32, I32]),
        f("state_decrypt", &[I32, I32, I32, I32, I32, I32]),
        f(
            "state_decrypt_detached",
            &[I32, I32, I32, I32, I32, I32, I32, I32],
        ),
        f("state_ratchet", &[I32]),
        f("tag_len", &[I32, I32]),
        f("tag_pull", &[I32, I32, I32, I32]),
        f("tag_verify", &[I32, I32, I32]),
        f("tag_close", &[I32]),
    ],
);

/// The complete WASI-Crypto mock plugin.
pub static WASI_CRYPTO_MOCK: PluginDescriptor = PluginDescriptor::new(
    PluginFamily::WasiCrypto,
    &[COMMON, ASYMMETRIC_COMMON, KX, SIGNATURES, SYMMETRIC],
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AbiType;

    #[test]
    fn test_module_sizes() {
        assert_eq!(COMMON.functions.len(), 10);
        assert_eq!(ASYMMETRIC_COMMON.functions.len(), 20);
        assert_eq!(KX.functions.len(), 3);
        assert_eq!(SIGNATURES.functions.len(), 11);
        assert_eq!(SYMMETRIC.functions.len(), 28);
        assert_eq!(WASI_CRYPTO_MOCK.function_count(), 72);
    }

    #[test]
    fn test_i64_rows() {
        // Only four crypto functions carry an i64 parameter.
        let wide: Vec<_> = WASI_CRYPTO_MOCK
            .functions()
            .filter(|(_, f)| f.params.contains(&AbiType::I64))
            .map(|(_, f)| f.name)
            .collect();
        assert_eq!(
            wide,
            [
                "options_set_u64",
                "secrets_manager_invalidate",
                "keypair_from_id",
                "key_from_id",
            ]
        );
    }

    #[test]
    fn test_names_unique_within_each_module() {
        for module in WASI_CRYPTO_MOCK.modules {
            let mut names: Vec<_> = module.functions.iter().map(|f| f.name).collect();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), module.functions.len(), "{}", module.name);
        }
    }

    #[test]
    fn test_state_decrypt_detached_arity() {
        let desc = WASI_CRYPTO_MOCK
            .find("wasi_ephemeral_crypto_symmetric", "state_decrypt_detached")
            .unwrap();
        assert_eq!(desc.params.len(), 8);
        assert!(desc.params.iter().all(|p| *p == AbiType::I32));
    }
}
