//! CoinGecko simple price response.

use serde::{Deserialize, Serialize};

/// `{ "solana": { "usd": 142.37 } }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimplePriceResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solana: Option<UsdQuote>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UsdQuote {
    pub usd: f64,
}

impl SimplePriceResponse {
    /// SOL price in USD, if the response carries one.
    pub fn sol_usd(&self) -> Option<f64> {
        self.solana.map(|quote| quote.usd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_price() {
        let response: SimplePriceResponse =
            serde_json::from_str(r#"{"solana":{"usd":142.37}}"#).unwrap();
        assert_eq!(response.sol_usd(), Some(142.37));
    }

    #[test]
    fn test_decode_missing_coin() {
        let response: SimplePriceResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.sol_usd(), None);
    }
}
