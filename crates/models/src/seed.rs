//! Seed dataset served by the mock backend's fetch path.

use once_cell::sync::Lazy;

use crate::user::{Address, Company, Geo, User};

static SEED_USERS: Lazy<Vec<User>> = Lazy::new(|| {
    vec![
        User {
            id: "1".into(),
            name: "John Doe".into(),
            email: "john.doe@example.com".into(),
            phone: "+1-555-0123".into(),
            company: Company {
                name: "Tech Solutions Inc.".into(),
                catch_phrase: Some("Innovative technology solutions".into()),
                bs: Some("synergistic solutions".into()),
            },
            address: Address {
                street: "123 Main St".into(),
                city: "New York".into(),
                zipcode: "10001".into(),
                geo: Geo { lat: "40.7128".into(), lng: "-74.0060".into() },
            },
            website: Some("john-doe.com".into()),
            username: Some("johndoe".into()),
        },
        User {
            id: "2".into(),
            name: "Jane Smith".into(),
            email: "jane.smith@example.com".into(),
            phone: "+1-555-0456".into(),
            company: Company {
                name: "Design Studios LLC".into(),
                catch_phrase: Some("Creative design solutions".into()),
                bs: Some("innovative designs".into()),
            },
            address: Address {
                street: "456 Oak Ave".into(),
                city: "Los Angeles".into(),
                zipcode: "90210".into(),
                geo: Geo { lat: "34.0522".into(), lng: "-118.2437".into() },
            },
            website: Some("jane-smith.com".into()),
            username: Some("janesmith".into()),
        },
        User {
            id: "3".into(),
            name: "Mike Johnson".into(),
            email: "mike.johnson@example.com".into(),
            phone: "+1-555-0789".into(),
            company: Company {
                name: "Marketing Pro".into(),
                catch_phrase: Some("Strategic marketing excellence".into()),
                bs: Some("digital marketing".into()),
            },
            address: Address {
                street: "789 Pine St".into(),
                city: "Chicago".into(),
                zipcode: "60601".into(),
                geo: Geo { lat: "41.8781".into(), lng: "-87.6298".into() },
            },
            website: Some("mike-johnson.com".into()),
            username: Some("mikejohnson".into()),
        },
    ]
});

/// The fixed seed list, in listing order. Returns owned clones so callers
/// can mutate freely.
pub fn seed_users() -> Vec<User> {
    SEED_USERS.clone()
}
