//! Transaction history records.

use serde::{Deserialize, Serialize};

/// One entry of `GET /account/transactions`.
///
/// The endpoint returns more fields (slot, fee, status, signer); only the
/// signature and block time are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    #[serde(rename = "txHash")]
    pub tx_hash: String,

    /// Unix seconds, `null` when the node has not recorded it
    #[serde(rename = "blockTime", default)]
    pub block_time: Option<i64>,
}

/// Query string for the history endpoint, address percent-encoded by the caller.
pub fn history_query(encoded_address: &str, limit: usize) -> String {
    format!("account={}&limit={}", encoded_address, limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_history() {
        let body = r#"[
            {"txHash":"5VERv8NMvzbJMEkV8xnrLkEaWRtSz9CosKDYjCJjBRnb","blockTime":1700000000,"slot":228000000,"fee":5000},
            {"txHash":"3nqy2sWrwFfN6hFe1cK6hQeJnWbyQBsvhbTPgGUtVuJ2","blockTime":null},
            {"txHash":"2Xc4Zt3ujCWpzUuF1pWJVT2C6pXLV3ueRbnJ7vBvS5qE"}
        ]"#;
        let records: Vec<TransactionRecord> = serde_json::from_str(body).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].block_time, Some(1_700_000_000));
        assert_eq!(records[1].block_time, None);
        assert_eq!(records[2].block_time, None);
    }

    #[test]
    fn test_history_query() {
        assert_eq!(history_query("abc", 5), "account=abc&limit=5");
    }
}
