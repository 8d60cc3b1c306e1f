mod auth;
mod balances;
pub mod client;
mod leaves;
mod manager;
pub mod types;

pub use client::*;
pub use manager::Decision;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;
#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests;
