//! Server control and introspection.

use serde::{Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MemoryInfoMode {
    #[default]
    Stats,
    MallocInfo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct GetMemoryInfoParams {
    pub mode: MemoryInfoMode,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct HelpParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

/// Debug logging categories to switch on or off. `Enable` and `Disable`
/// are the numeric spellings (`1` and `0`) of `All` and `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoggingSelection {
    Categories(Vec<String>),
    All,
    None,
    Enable,
    Disable,
}

impl Serialize for LoggingSelection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Categories(categories) => categories.serialize(serializer),
            Self::All => serializer.serialize_str("all"),
            Self::None => serializer.serialize_str("none"),
            Self::Enable => serializer.serialize_u8(1),
            Self::Disable => serializer.serialize_u8(0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct LoggingParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<LoggingSelection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude: Option<LoggingSelection>,
}

rpc_methods! {
    node fn get_memory_info(params: GetMemoryInfoParams) => "getmemoryinfo";
    node fn get_rpc_info() => "getrpcinfo";
    /// List all commands, or get help for one.
    node fn help(params: HelpParams) => "help";
    /// Get and set the node's debug logging categories.
    node fn logging(params: LoggingParams) => "logging";
    node fn stop() => "stop";
    node fn uptime() => "uptime";
}
