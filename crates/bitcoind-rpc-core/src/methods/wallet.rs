//! Wallet procedures.
//!
//! Everything here is routed to `/wallet/<name>` except the wallet
//! management procedures (`createwallet`, `listwallets`, `loadwallet`,
//! `unloadwallet`), which address the node itself.

use serde::Serialize;

use super::params::{AddressType, BtcAmount, EstimateMode, PrevTx, SigHashType, TxIdParams};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddMultisigAddressParams {
    pub nrequired: u32,
    pub keys: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_type: Option<AddressType>,
}

impl AddMultisigAddressParams {
    pub fn new(nrequired: u32, keys: Vec<String>) -> Self {
        Self {
            nrequired,
            keys,
            label: None,
            address_type: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BackupWalletParams {
    pub destination: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct GetBalanceParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minconf: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_watchonly: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct GetNewAddressParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_type: Option<AddressType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct GetRawChangeAddressParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_type: Option<AddressType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetTransactionParams {
    pub txid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_watchonly: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verbose: Option<bool>,
}

impl GetTransactionParams {
    pub fn new(txid: impl Into<String>) -> Self {
        Self {
            txid: txid.into(),
            include_watchonly: None,
            verbose: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListTransactionsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub count: u32,
    pub skip: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_watchonly: Option<bool>,
}

impl Default for ListTransactionsParams {
    fn default() -> Self {
        Self {
            label: None,
            count: 10,
            skip: 0,
            include_watchonly: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListUnspentParams {
    pub minconf: u32,
    pub maxconf: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<String>>,
    pub include_unsafe: bool,
}

impl Default for ListUnspentParams {
    fn default() -> Self {
        Self {
            minconf: 1,
            maxconf: 9_999_999,
            addresses: None,
            include_unsafe: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SendToAddressParams {
    pub address: String,
    pub amount: BtcAmount,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_to: Option<String>,
    pub subtractfeefromamount: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replaceable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conf_target: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimate_mode: Option<EstimateMode>,
}

impl SendToAddressParams {
    pub fn new(address: impl Into<String>, amount: impl Into<BtcAmount>) -> Self {
        Self {
            address: address.into(),
            amount: amount.into(),
            comment: None,
            comment_to: None,
            subtractfeefromamount: false,
            replaceable: None,
            conf_target: None,
            estimate_mode: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignRawTransactionWithWalletParams {
    pub hexstring: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prevtxs: Option<Vec<PrevTx>>,
    pub sighashtype: SigHashType,
}

impl SignRawTransactionWithWalletParams {
    pub fn new(hexstring: impl Into<String>) -> Self {
        Self {
            hexstring: hexstring.into(),
            prevtxs: None,
            sighashtype: SigHashType::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WalletProcessPsbtParams {
    pub psbt: String,
    pub sign: bool,
    pub sighashtype: SigHashType,
    pub bip32derivs: bool,
}

impl WalletProcessPsbtParams {
    pub fn new(psbt: impl Into<String>) -> Self {
        Self {
            psbt: psbt.into(),
            sign: true,
            sighashtype: SigHashType::default(),
            bip32derivs: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreateWalletParams {
    pub wallet_name: String,
    pub disable_private_keys: bool,
    pub blank: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passphrase: Option<String>,
    pub avoid_reuse: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descriptors: Option<bool>,
}

impl CreateWalletParams {
    pub fn new(wallet_name: impl Into<String>) -> Self {
        Self {
            wallet_name: wallet_name.into(),
            disable_private_keys: false,
            blank: false,
            passphrase: None,
            avoid_reuse: false,
            descriptors: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadWalletParams {
    pub filename: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct UnloadWalletParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_name: Option<String>,
}

rpc_methods! {
    /// Mark an in-wallet transaction as abandoned so its inputs can be respent.
    wallet fn abandon_transaction(params: TxIdParams) => "abandontransaction";
    /// Stop a wallet rescan started by an RPC call.
    wallet fn abort_rescan() => "abortrescan";
    wallet fn add_multisig_address(params: AddMultisigAddressParams) => "addmultisigaddress";
    wallet fn backup_wallet(params: BackupWalletParams) => "backupwallet";
    wallet fn get_balance(params: GetBalanceParams) => "getbalance";
    wallet fn get_balances() => "getbalances";
    wallet fn get_new_address(params: GetNewAddressParams) => "getnewaddress";
    wallet fn get_raw_change_address(params: GetRawChangeAddressParams) => "getrawchangeaddress";
    wallet fn get_transaction(params: GetTransactionParams) => "gettransaction";
    wallet fn get_wallet_info() => "getwalletinfo";
    wallet fn list_transactions(params: ListTransactionsParams) => "listtransactions";
    wallet fn list_unspent(params: ListUnspentParams) => "listunspent";
    wallet fn send_to_address(params: SendToAddressParams) => "sendtoaddress";
    wallet fn sign_raw_transaction_with_wallet(params: SignRawTransactionWithWalletParams) => "signrawtransactionwithwallet";
    wallet fn wallet_process_psbt(params: WalletProcessPsbtParams) => "walletprocesspsbt";
    node fn create_wallet(params: CreateWalletParams) => "createwallet";
    node fn list_wallets() => "listwallets";
    node fn load_wallet(params: LoadWalletParams) => "loadwallet";
    node fn unload_wallet(params: UnloadWalletParams) => "unloadwallet";
}
