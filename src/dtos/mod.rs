pub mod account;
pub mod transaction;

pub use account::{CreateAccountRequest, MessageResponse, UpdateAccountRequest};
pub use transaction::{BalanceResponse, StatementDateParams, TransactionRequest};
