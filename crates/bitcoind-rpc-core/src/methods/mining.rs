//! Mining and block submission.

use serde::Serialize;

use super::params::HexDataParams;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateMode {
    Template,
    Proposal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<TemplateMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<Vec<String>>,
    pub rules: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GetBlockTemplateParams {
    pub template_request: TemplateRequest,
}

impl GetBlockTemplateParams {
    /// A plain template request for the given softfork rules (e.g. `segwit`).
    pub fn with_rules<I, S>(rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            template_request: TemplateRequest {
                mode: None,
                capabilities: None,
                rules: rules.into_iter().map(Into::into).collect(),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GetNetworkHashPsParams {
    pub nblocks: i64,
    pub height: i64,
}

impl Default for GetNetworkHashPsParams {
    fn default() -> Self {
        Self {
            nblocks: 120,
            height: -1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrioritiseTransactionParams {
    pub txid: String,
    /// Fee adjustment in satoshis.
    pub fee_delta: i64,
}

rpc_methods! {
    node fn get_block_template(params: GetBlockTemplateParams) => "getblocktemplate";
    node fn get_mining_info() => "getmininginfo";
    /// Estimated network hashes per second over the last `nblocks` blocks.
    node fn get_network_hash_ps(params: GetNetworkHashPsParams) => "getnetworkhashps";
    node fn prioritise_transaction(params: PrioritiseTransactionParams) => "prioritisetransaction";
    node fn submit_block(params: HexDataParams) => "submitblock";
    /// Submit a block header as a candidate chain tip.
    node fn submit_header(params: HexDataParams) => "submitheader";
}
