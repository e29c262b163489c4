//! Customer record and request payloads.

use serde::{Deserialize, Deserializer, Serialize};

/// A stored customer. `id` is assigned by storage and never changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub status: String,
}

/// Body of `POST /customers`. Missing or null fields are stored as empty strings; any `id` is ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct NewCustomer {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub status: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl NewCustomer {
    pub fn new(name: impl Into<String>, email: impl Into<String>, status: impl Into<String>) -> Self {
        NewCustomer {
            name: name.into(),
            email: email.into(),
            status: status.into(),
        }
    }

    pub fn into_customer(self, id: i32) -> Customer {
        Customer {
            id,
            name: self.name,
            email: self.email,
            status: self.status,
        }
    }
}

/// Body of `PUT /customers/:id`. Present fields overlay the stored row.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct CustomerPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub status: Option<String>,
}

impl CustomerPatch {
    pub fn apply(self, customer: &mut Customer) {
        if let Some(name) = self.name {
            customer.name = name;
        }
        if let Some(email) = self.email {
            customer.email = email;
        }
        if let Some(status) = self.status {
            customer.status = status;
        }
    }
}
