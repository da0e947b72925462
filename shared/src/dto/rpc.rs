//! # Solana JSON-RPC
//!
//! Just enough of the JSON-RPC 2.0 envelope for `getBalance`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON-RPC 2.0 request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RpcRequest {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: &'static str,
    pub params: Vec<Value>,
}

impl RpcRequest {
    /// `getBalance` for a base58 address.
    pub fn get_balance(id: u64, address: &str) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            method: "getBalance",
            params: vec![Value::String(address.to_string())],
        }
    }
}

/// JSON-RPC 2.0 response carrying either `result` or `error`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RpcResponse<T> {
    pub result: Option<T>,
    pub error: Option<RpcErrorObject>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
}

/// Slot context attached to most Solana RPC results.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RpcContext {
    pub slot: u64,
}

/// `getBalance` result: lamports at `context.slot`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct BalanceResult {
    pub context: RpcContext,
    pub value: u64,
}
