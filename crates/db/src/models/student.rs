//! Student document model and DTOs.

use roster_core::types::StudentId;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use validator::Validate;

/// Maximum number of documents returned by a single list query.
pub const LIST_LIMIT: usize = 100;

/// Postal address embedded in every student document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub city: String,
    pub country: String,
}

/// Persisted layout of `students.doc`. The key lives outside the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentDocument {
    pub name: String,
    pub age: i64,
    pub address: Address,
}

/// A stored student as returned to clients: the key rendered as `id` plus
/// the document fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub age: i64,
    pub address: Address,
}

impl Student {
    pub fn from_document(id: StudentId, doc: StudentDocument) -> Self {
        Self {
            id,
            name: doc.name,
            age: doc.age,
            address: doc.address,
        }
    }
}

/// DTO for creating a new student. Every field is required.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateStudent {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub age: i64,
    pub address: Address,
}

impl From<CreateStudent> for StudentDocument {
    fn from(input: CreateStudent) -> Self {
        Self {
            name: input.name,
            age: input.age,
            address: input.address,
        }
    }
}

/// DTO for a partial update. All fields are optional.
///
/// An absent field (or an explicit `null`) leaves the stored value alone. A
/// present `address` replaces the embedded address as a whole.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateStudent {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    pub age: Option<i64>,
    pub address: Option<Address>,
}

impl UpdateStudent {
    /// True when no field is present, i.e. there is nothing to write.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.address.is_none()
    }

    /// Build the set of top-level document keys to overwrite.
    ///
    /// Only present fields appear in the returned object, so merging it into a
    /// stored document with JSONB `||` touches nothing else.
    pub fn to_set_document(&self) -> Value {
        let mut set = Map::new();
        if let Some(name) = &self.name {
            set.insert("name".into(), Value::from(name.as_str()));
        }
        if let Some(age) = self.age {
            set.insert("age".into(), Value::from(age));
        }
        if let Some(address) = &self.address {
            set.insert(
                "address".into(),
                json!({ "city": address.city, "country": address.country }),
            );
        }
        Value::Object(set)
    }

    /// Copy every present field onto `doc`.
    pub fn apply_to(&self, doc: &mut StudentDocument) {
        if let Some(name) = &self.name {
            doc.name.clone_from(name);
        }
        if let Some(age) = self.age {
            doc.age = age;
        }
        if let Some(address) = &self.address {
            doc.address = address.clone();
        }
    }
}

/// Conjunction of constraints for listing students. `None` means unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentFilter {
    /// Exact match on `address.country`.
    pub country: Option<String>,
    /// Inclusive lower bound on `age`.
    pub min_age: Option<i64>,
}

impl StudentFilter {
    pub fn matches(&self, doc: &StudentDocument) -> bool {
        let country_ok = self
            .country
            .as_deref()
            .is_none_or(|country| doc.address.country == country);
        let age_ok = self.min_age.is_none_or(|min| doc.age >= min);
        country_ok && age_ok
    }
}
