//! Service layer providing the in-memory user store.
//! - Single source of truth for the user collection; consumers hold a
//!   cloneable [`store::UserStore`] handle instead of an ambient global.
//! - Every mutation funnels through the reducer in [`state`].
//! - The [`backend`] seam simulates remote latency and can be swapped for
//!   a real client without changing the store's contract.

pub mod backend;
pub mod errors;
pub mod query;
pub mod state;
pub mod store;

#[cfg(test)]
pub mod test_support;
