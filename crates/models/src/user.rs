use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Latitude/longitude pair, kept as strings the way the upstream data
/// represents them (no numeric parsing anywhere in the system).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub zipcode: String,
    pub geo: Geo,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    #[serde(rename = "catchPhrase", skip_serializing_if = "Option::is_none")]
    pub catch_phrase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bs: Option<String>,
}

/// A user record. `id` is assigned once at creation and never changes;
/// every other field is mutable through [`UserPatch`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: Company,
    pub address: Address,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// Input shape for creating a user. Carries no `id`, `website` or
/// `username`; those are derived by [`User::from_request`]. `company` is a
/// flat name here and expanded into a [`Company`] on creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub address: Address,
}

impl User {
    /// Build a full record from a create request.
    ///
    /// Derivation rules:
    /// - `id`: fresh UUID v4
    /// - `website`: lowercased name, spaces to hyphens, `.com` suffix
    /// - `username`: lowercased name with spaces removed
    /// - `company`: request's flat name plus fixed placeholder copy
    pub fn from_request(request: CreateUserRequest) -> Self {
        let lower = request.name.to_lowercase();
        Self {
            id: Uuid::new_v4().to_string(),
            website: Some(format!("{}.com", lower.replace(' ', "-"))),
            username: Some(lower.replace(' ', "")),
            name: request.name,
            email: request.email,
            phone: request.phone,
            company: Company {
                name: request.company,
                catch_phrase: Some("New company".to_string()),
                bs: Some("business solutions".to_string()),
            },
            address: request.address,
        }
    }
}

/// Partial update over a [`User`]. `Some` fields overwrite, `None` fields
/// keep the existing value. `id` is deliberately absent.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<Company>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl UserPatch {
    /// Merge this patch over `user` in place.
    pub fn apply(self, user: &mut User) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(phone) = self.phone {
            user.phone = phone;
        }
        if let Some(company) = self.company {
            user.company = company;
        }
        if let Some(address) = self.address {
            user.address = address;
        }
        if let Some(website) = self.website {
            user.website = Some(website);
        }
        if let Some(username) = self.username {
            user.username = Some(username);
        }
    }
}
