//! UI Components

pub mod navbar;
pub mod transaction_list;
pub mod wallet_summary;

pub use navbar::Navbar;
pub use transaction_list::TransactionList;
pub use wallet_summary::WalletSummary;
