//! Application constants

/// Solana cluster the front-end reads from (`mainnet-beta`, `devnet`, `testnet`)
pub const NETWORK: &str = "devnet";

pub const PRICE_API: &str = "https://api.coingecko.com/api/v3/simple/price";
pub const HISTORY_API: &str = "https://public-api.solscan.io/account/transactions";

pub const PHANTOM_INSTALL_URL: &str = "https://phantom.app";
