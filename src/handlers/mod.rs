pub mod account;
pub mod app;
pub mod transaction;

pub use account::{create_account, delete_account, get_account, update_account};
pub use app::{health_check, index, metrics_handler};
pub use transaction::{deposit, get_balance, get_statement, get_statement_by_date, withdraw};
