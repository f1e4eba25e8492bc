pub mod client;
mod products;
pub mod types;

pub use client::*;
pub(crate) use products::encode_path_segment;
pub use types::*;

#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod test_support;
