//! Peer-to-peer network management.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AddNodeCommand {
    Add,
    Remove,
    Onetry,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddNodeParams {
    pub node: String,
    pub command: AddNodeCommand,
}

/// Identify the peer to drop either by address or by node id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DisconnectNodeParams {
    Address { address: String },
    NodeId { nodeid: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct GetAddedNodeInfoParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GetNodeAddressesParams {
    pub count: u32,
}

impl Default for GetNodeAddressesParams {
    fn default() -> Self {
        Self { count: 1 }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SetBanCommand {
    Add,
    Remove,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetBanParams {
    pub subnet: String,
    pub command: SetBanCommand,
    /// Ban duration in seconds; `0` lets the node use its default.
    pub bantime: u64,
    pub absolute: bool,
}

impl SetBanParams {
    pub fn new(subnet: impl Into<String>, command: SetBanCommand) -> Self {
        Self {
            subnet: subnet.into(),
            command,
            bantime: 0,
            absolute: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SetNetworkActiveParams {
    pub state: bool,
}

rpc_methods! {
    node fn add_node(params: AddNodeParams) => "addnode";
    node fn clear_banned() => "clearbanned";
    node fn disconnect_node(params: DisconnectNodeParams) => "disconnectnode";
    node fn get_added_node_info(params: GetAddedNodeInfoParams) => "getaddednodeinfo";
    node fn get_connection_count() => "getconnectioncount";
    /// Bytes in, bytes out and current time.
    node fn get_net_totals() => "getnettotals";
    node fn get_network_info() => "getnetworkinfo";
    node fn get_node_addresses(params: GetNodeAddressesParams) => "getnodeaddresses";
    node fn get_peer_info() => "getpeerinfo";
    node fn list_banned() => "listbanned";
    node fn ping() => "ping";
    node fn set_ban(params: SetBanParams) => "setban";
    node fn set_network_active(params: SetNetworkActiveParams) => "setnetworkactive";
}
