//! Chain state, block and mempool queries.

use serde::{Serialize, Serializer};

use super::params::{BlockHashParams, HeightParams, Range, TxIdParams, VerboseParams};

/// Output format of `getblock`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Serialized, hex-encoded block.
    Hex,
    /// Decoded block with txids.
    #[default]
    Decoded,
    /// Decoded block with decoded transactions.
    DecodedWithTransactions,
}

impl Serialize for Verbosity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let level: u8 = match self {
            Self::Hex => 0,
            Self::Decoded => 1,
            Self::DecodedWithTransactions => 2,
        };
        serializer.serialize_u8(level)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetBlockParams {
    pub blockhash: String,
    pub verbosity: Verbosity,
}

impl GetBlockParams {
    pub fn new(blockhash: impl Into<String>) -> Self {
        Self {
            blockhash: blockhash.into(),
            verbosity: Verbosity::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetBlockHeaderParams {
    pub blockhash: String,
    pub verbose: bool,
}

impl GetBlockHeaderParams {
    pub fn new(blockhash: impl Into<String>) -> Self {
        Self {
            blockhash: blockhash.into(),
            verbose: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum HashOrHeight {
    Hash(String),
    Height(u64),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetBlockStatsParams {
    pub hash_or_height: HashOrHeight,
    pub stats: Vec<String>,
}

impl GetBlockStatsParams {
    pub fn new(hash_or_height: HashOrHeight) -> Self {
        Self {
            hash_or_height,
            stats: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct GetChainTxStatsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nblocks: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blockhash: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MempoolRelativesParams {
    pub txid: String,
    pub verbose: bool,
}

impl MempoolRelativesParams {
    pub fn new(txid: impl Into<String>) -> Self {
        Self {
            txid: txid.into(),
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetTxOutParams {
    pub txid: String,
    pub n: u32,
    pub include_mempool: bool,
}

impl GetTxOutParams {
    pub fn new(txid: impl Into<String>, n: u32) -> Self {
        Self {
            txid: txid.into(),
            n,
            include_mempool: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetTxOutProofParams {
    pub txids: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blockhash: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScanAction {
    Start,
    Abort,
    Status,
}

/// An output descriptor to scan for, optionally with a derivation range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ScanObject {
    Descriptor(String),
    Ranged { desc: String, range: Range },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanTxOutSetParams {
    pub action: ScanAction,
    pub scanobjects: Vec<ScanObject>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VerifyChainParams {
    pub checklevel: u8,
    pub nblocks: u64,
}

impl Default for VerifyChainParams {
    fn default() -> Self {
        Self {
            checklevel: 3,
            nblocks: 6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifyTxOutProofParams {
    pub proof: String,
}

rpc_methods! {
    /// Hash of the best (tip) block in the most-work chain.
    node fn get_best_block_hash() => "getbestblockhash";
    /// Block data for `blockhash` at the requested verbosity.
    node fn get_block(params: GetBlockParams) => "getblock";
    /// Various state info regarding blockchain processing.
    node fn get_blockchain_info() => "getblockchaininfo";
    /// Height of the most-work fully-validated chain.
    node fn get_block_count() => "getblockcount";
    /// Hash of the block at `height` in the best chain.
    node fn get_block_hash(params: HeightParams) => "getblockhash";
    node fn get_block_header(params: GetBlockHeaderParams) => "getblockheader";
    /// Per-block statistics for a block given by hash or height.
    node fn get_block_stats(params: GetBlockStatsParams) => "getblockstats";
    node fn get_chain_tips() => "getchaintips";
    node fn get_chain_tx_stats(params: GetChainTxStatsParams) => "getchaintxstats";
    node fn get_difficulty() => "getdifficulty";
    /// All in-mempool ancestors of a mempool transaction.
    node fn get_mempool_ancestors(params: MempoolRelativesParams) => "getmempoolancestors";
    /// All in-mempool descendants of a mempool transaction.
    node fn get_mempool_descendants(params: MempoolRelativesParams) => "getmempooldescendants";
    node fn get_mempool_entry(params: TxIdParams) => "getmempoolentry";
    node fn get_mempool_info() => "getmempoolinfo";
    node fn get_raw_mempool(params: VerboseParams) => "getrawmempool";
    /// Details about an unspent transaction output; `null` when spent.
    node fn get_tx_out(params: GetTxOutParams) => "gettxout";
    node fn get_tx_out_proof(params: GetTxOutProofParams) => "gettxoutproof";
    node fn get_tx_out_set_info() => "gettxoutsetinfo";
    node fn precious_block(params: BlockHashParams) => "preciousblock";
    node fn prune_blockchain(params: HeightParams) => "pruneblockchain";
    node fn save_mempool() => "savemempool";
    /// Scan the UTXO set for outputs matching descriptors.
    node fn scan_tx_out_set(params: ScanTxOutSetParams) => "scantxoutset";
    node fn verify_chain(params: VerifyChainParams) => "verifychain";
    node fn verify_tx_out_proof(params: VerifyTxOutProofParams) => "verifytxoutproof";
}
