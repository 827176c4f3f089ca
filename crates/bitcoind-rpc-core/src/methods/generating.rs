//! Block generation (regtest). Both procedures are wallet-scoped.

use serde::Serialize;

const DEFAULT_MAX_TRIES: u64 = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenerateParams {
    pub nblocks: u64,
    pub maxtries: u64,
}

impl GenerateParams {
    pub fn new(nblocks: u64) -> Self {
        Self {
            nblocks,
            maxtries: DEFAULT_MAX_TRIES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateToAddressParams {
    pub nblocks: u64,
    pub maxtries: u64,
    pub address: String,
}

impl GenerateToAddressParams {
    pub fn new(nblocks: u64, address: impl Into<String>) -> Self {
        Self {
            nblocks,
            maxtries: DEFAULT_MAX_TRIES,
            address: address.into(),
        }
    }
}

rpc_methods! {
    /// Mine blocks immediately to an address in the wallet.
    wallet fn generate(params: GenerateParams) => "generate";
    /// Mine blocks immediately to `address`.
    wallet fn generate_to_address(params: GenerateToAddressParams) => "generatetoaddress";
}
