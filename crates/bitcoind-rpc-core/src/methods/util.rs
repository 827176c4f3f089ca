//! Stateless utilities: descriptors, fee estimation, message signing.

use serde::Serialize;

use super::params::{AddressParams, AddressType, DescriptorParams, EstimateMode, Range};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateMultisigParams {
    pub nrequired: u32,
    pub keys: Vec<String>,
    pub address_type: AddressType,
}

impl CreateMultisigParams {
    pub fn new(nrequired: u32, keys: Vec<String>) -> Self {
        Self {
            nrequired,
            keys,
            address_type: AddressType::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeriveAddressesParams {
    pub descriptor: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<Range>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EstimateSmartFeeParams {
    pub conf_target: u32,
    pub estimate_mode: EstimateMode,
}

impl EstimateSmartFeeParams {
    pub fn new(conf_target: u32) -> Self {
        Self {
            conf_target,
            estimate_mode: EstimateMode::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignMessageWithPrivKeyParams {
    pub privkey: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifyMessageParams {
    pub address: String,
    pub signature: String,
    pub message: String,
}

rpc_methods! {
    /// Create an m-of-n multisig address without adding it to a wallet.
    node fn create_multisig(params: CreateMultisigParams) => "createmultisig";
    node fn derive_addresses(params: DeriveAddressesParams) => "deriveaddresses";
    /// Fee rate needed to confirm within `conf_target` blocks.
    node fn estimate_smart_fee(params: EstimateSmartFeeParams) => "estimatesmartfee";
    node fn get_descriptor_info(params: DescriptorParams) => "getdescriptorinfo";
    node fn sign_message_with_privkey(params: SignMessageWithPrivKeyParams) => "signmessagewithprivkey";
    node fn validate_address(params: AddressParams) => "validateaddress";
    node fn verify_message(params: VerifyMessageParams) => "verifymessage";
}
