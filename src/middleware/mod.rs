pub mod customer_id;
pub mod request_id;

pub use customer_id::CustomerId;
pub use request_id::request_id_middleware;
