//! Raw transaction and PSBT handling.

use std::collections::BTreeMap;

use serde::Serialize;

use super::params::{
    BtcAmount, EstimateMode, HexStringParams, PrevTx, PsbtParams, SigHashType, TxsParams,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConvertToPsbtParams {
    pub hexstring: String,
    pub permitsigdata: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iswitness: Option<bool>,
}

impl ConvertToPsbtParams {
    pub fn new(hexstring: impl Into<String>) -> Self {
        Self {
            hexstring: hexstring.into(),
            permitsigdata: false,
            iswitness: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionInput {
    pub txid: String,
    pub vout: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence: Option<u32>,
}

/// One output object: either address → amount pairs or an `OP_RETURN` payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TransactionOutput {
    Data { data: String },
    Addresses(BTreeMap<String, BtcAmount>),
}

impl TransactionOutput {
    pub fn address(address: impl Into<String>, amount: impl Into<BtcAmount>) -> Self {
        Self::Addresses(BTreeMap::from([(address.into(), amount.into())]))
    }

    pub fn data(hex: impl Into<String>) -> Self {
        Self::Data { data: hex.into() }
    }
}

/// Shared by `createpsbt` and `createrawtransaction`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateTransactionParams {
    pub inputs: Vec<TransactionInput>,
    pub outputs: Vec<TransactionOutput>,
    pub locktime: u32,
    pub replaceable: bool,
}

impl CreateTransactionParams {
    pub fn new(inputs: Vec<TransactionInput>, outputs: Vec<TransactionOutput>) -> Self {
        Self {
            inputs,
            outputs,
            locktime: 0,
            replaceable: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodeRawTransactionParams {
    pub hexstring: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iswitness: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinalizePsbtParams {
    pub psbt: String,
    pub extract: bool,
}

impl FinalizePsbtParams {
    pub fn new(psbt: impl Into<String>) -> Self {
        Self {
            psbt: psbt.into(),
            extract: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct FundOptions {
    #[serde(rename = "changeAddress", skip_serializing_if = "Option::is_none")]
    pub change_address: Option<String>,
    #[serde(rename = "changePosition", skip_serializing_if = "Option::is_none")]
    pub change_position: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_type: Option<String>,
    #[serde(rename = "includeWatching", skip_serializing_if = "Option::is_none")]
    pub include_watching: Option<bool>,
    #[serde(rename = "lockUnspents", skip_serializing_if = "Option::is_none")]
    pub lock_unspents: Option<bool>,
    #[serde(rename = "feeRate", skip_serializing_if = "Option::is_none")]
    pub fee_rate: Option<BtcAmount>,
    #[serde(
        rename = "subtractFeeFromOutputs",
        skip_serializing_if = "Option::is_none"
    )]
    pub subtract_fee_from_outputs: Option<Vec<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replaceable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conf_target: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimate_mode: Option<EstimateMode>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FundRawTransactionParams {
    pub hexstring: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<FundOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iswitness: Option<bool>,
}

impl FundRawTransactionParams {
    pub fn new(hexstring: impl Into<String>) -> Self {
        Self {
            hexstring: hexstring.into(),
            options: None,
            iswitness: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetRawTransactionParams {
    pub txid: String,
    pub verbose: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blockhash: Option<String>,
}

impl GetRawTransactionParams {
    pub fn new(txid: impl Into<String>) -> Self {
        Self {
            txid: txid.into(),
            verbose: false,
            blockhash: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendRawTransactionParams {
    pub hexstring: String,
    pub allowhighfees: bool,
}

impl SendRawTransactionParams {
    pub fn new(hexstring: impl Into<String>) -> Self {
        Self {
            hexstring: hexstring.into(),
            allowhighfees: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignRawTransactionWithKeyParams {
    pub hexstring: String,
    pub privkeys: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prevtxs: Option<Vec<PrevTx>>,
    pub sighashtype: SigHashType,
}

impl SignRawTransactionWithKeyParams {
    pub fn new(hexstring: impl Into<String>, privkeys: Vec<String>) -> Self {
        Self {
            hexstring: hexstring.into(),
            privkeys,
            prevtxs: None,
            sighashtype: SigHashType::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestMempoolAcceptParams {
    pub rawtxs: Vec<String>,
    pub allowhighfees: bool,
}

impl TestMempoolAcceptParams {
    pub fn new(rawtxs: Vec<String>) -> Self {
        Self {
            rawtxs,
            allowhighfees: false,
        }
    }
}

rpc_methods! {
    /// Status of a PSBT and its inputs.
    node fn analyze_psbt(params: PsbtParams) => "analyzepsbt";
    node fn combine_psbt(params: TxsParams) => "combinepsbt";
    node fn combine_raw_transaction(params: TxsParams) => "combinerawtransaction";
    node fn convert_to_psbt(params: ConvertToPsbtParams) => "converttopsbt";
    node fn create_psbt(params: CreateTransactionParams) => "createpsbt";
    node fn create_raw_transaction(params: CreateTransactionParams) => "createrawtransaction";
    node fn decode_psbt(params: PsbtParams) => "decodepsbt";
    node fn decode_raw_transaction(params: DecodeRawTransactionParams) => "decoderawtransaction";
    node fn decode_script(params: HexStringParams) => "decodescript";
    node fn finalize_psbt(params: FinalizePsbtParams) => "finalizepsbt";
    /// Add inputs from the wallet until the outputs are covered.
    wallet fn fund_raw_transaction(params: FundRawTransactionParams) => "fundrawtransaction";
    node fn get_raw_transaction(params: GetRawTransactionParams) => "getrawtransaction";
    node fn join_psbts(params: TxsParams) => "joinpsbts";
    /// Submit a serialized transaction to the node and network.
    node fn send_raw_transaction(params: SendRawTransactionParams) => "sendrawtransaction";
    node fn sign_raw_transaction_with_key(params: SignRawTransactionWithKeyParams) => "signrawtransactionwithkey";
    /// Whether the node's mempool would accept the given transactions.
    node fn test_mempool_accept(params: TestMempoolAcceptParams) => "testmempoolaccept";
    node fn utxo_update_psbt(params: PsbtParams) => "utxoupdatepsbt";
}
