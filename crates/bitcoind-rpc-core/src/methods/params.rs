//! Parameter records shared by several procedures, plus the small
//! enumerations of the node's API.
//!
//! Records serialize to the named-parameter object the node expects. Fields
//! with a documented default are plain values set by the constructor;
//! optional fields without one are omitted from the object when `None`.

use serde::Serialize;

// ==============================================================================
// Single-field records
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TxIdParams {
    pub txid: String,
}

impl TxIdParams {
    pub fn new(txid: impl Into<String>) -> Self {
        Self { txid: txid.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeightParams {
    pub height: u64,
}

impl HeightParams {
    pub fn new(height: u64) -> Self {
        Self { height }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockHashParams {
    pub blockhash: String,
}

impl BlockHashParams {
    pub fn new(blockhash: impl Into<String>) -> Self {
        Self {
            blockhash: blockhash.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HexDataParams {
    pub hexdata: String,
}

impl HexDataParams {
    pub fn new(hexdata: impl Into<String>) -> Self {
        Self {
            hexdata: hexdata.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HexStringParams {
    pub hexstring: String,
}

impl HexStringParams {
    pub fn new(hexstring: impl Into<String>) -> Self {
        Self {
            hexstring: hexstring.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PsbtParams {
    pub psbt: String,
}

impl PsbtParams {
    pub fn new(psbt: impl Into<String>) -> Self {
        Self { psbt: psbt.into() }
    }
}

/// A list of serialized transactions or PSBTs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TxsParams {
    pub txs: Vec<String>,
}

impl TxsParams {
    pub fn new<I, S>(txs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            txs: txs.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressParams {
    pub address: String,
}

impl AddressParams {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DescriptorParams {
    pub descriptor: String,
}

impl DescriptorParams {
    pub fn new(descriptor: impl Into<String>) -> Self {
        Self {
            descriptor: descriptor.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct VerboseParams {
    pub verbose: bool,
}

// ==============================================================================
// Shared values
// ==============================================================================

/// A BTC amount as the node accepts it: a JSON number or a decimal string.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BtcAmount {
    Number(f64),
    Text(String),
}

impl From<f64> for BtcAmount {
    fn from(amount: f64) -> Self {
        Self::Number(amount)
    }
}

impl From<&str> for BtcAmount {
    fn from(amount: &str) -> Self {
        Self::Text(amount.to_owned())
    }
}

impl From<String> for BtcAmount {
    fn from(amount: String) -> Self {
        Self::Text(amount)
    }
}

/// A derivation range: `end` alone means `[0, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Range {
    End(u64),
    Span(u64, u64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EstimateMode {
    Unset,
    Economical,
    #[default]
    Conservative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AddressType {
    #[default]
    Legacy,
    P2shSegwit,
    Bech32,
    Bech32m,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum SigHashType {
    #[default]
    #[serde(rename = "ALL")]
    All,
    #[serde(rename = "NONE")]
    None,
    #[serde(rename = "SINGLE")]
    Single,
    #[serde(rename = "ALL|ANYONECANPAY")]
    AllAnyoneCanPay,
    #[serde(rename = "NONE|ANYONECANPAY")]
    NoneAnyoneCanPay,
    #[serde(rename = "SINGLE|ANYONECANPAY")]
    SingleAnyoneCanPay,
}

/// A previous output being spent, for signing without a full UTXO set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrevTx {
    pub txid: String,
    pub vout: u32,
    #[serde(rename = "scriptPubKey")]
    pub script_pub_key: String,
    #[serde(rename = "redeemScript", skip_serializing_if = "Option::is_none")]
    pub redeem_script: Option<String>,
    #[serde(rename = "witnessScript", skip_serializing_if = "Option::is_none")]
    pub witness_script: Option<String>,
    pub amount: BtcAmount,
}
