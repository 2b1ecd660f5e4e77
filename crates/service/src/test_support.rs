//! Shared helpers for the store's unit tests.

use std::sync::Arc;

use configs::LatencyConfig;
use models::user::{Address, CreateUserRequest, Geo};

use crate::backend::MockBackend;
use crate::store::UserStore;

/// Store over a zero-latency mock, plus a handle to the mock for flipping
/// its failure switch.
pub fn instant_store() -> (UserStore, Arc<MockBackend>) {
    common::utils::logging::init_logging_default();
    let backend = Arc::new(MockBackend::new(LatencyConfig::instant()));
    (UserStore::new(backend.clone()), backend)
}

pub fn ann_lee_request() -> CreateUserRequest {
    CreateUserRequest {
        name: "Ann Lee".into(),
        email: "a@b.com".into(),
        phone: "555".into(),
        company: "Acme".into(),
        address: Address {
            street: "1 Rd".into(),
            city: "X".into(),
            zipcode: "1".into(),
            geo: Geo { lat: "0".into(), lng: "0".into() },
        },
    }
}
