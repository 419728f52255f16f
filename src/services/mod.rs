pub mod ledger;
pub mod metrics;

pub use ledger::{balance_of, LedgerStore};
pub use metrics::{get_metrics, init_metrics};
