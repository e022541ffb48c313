//! Example `user` entity.

use crate::rest::{decode_field, encode_field, DecodeError, Entity, Record};

/// A user record projected onto a fixed shape.
///
/// Every field is independently optional; absent fields stay absent through
/// encode/decode round trips.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct User {
    /// Record id.
    pub id: Option<String>,
    /// Display name.
    pub name: Option<String>,
    /// Email address.
    pub email: Option<String>,
    /// Age in years.
    pub age: Option<i64>,
    /// Phone number.
    pub phone: Option<String>,
    /// Postal address.
    pub address: Option<String>,
}

impl Entity for User {
    const MODEL: &'static str = "user";

    fn from_record(record: &Record) -> Result<Self, DecodeError> {
        Ok(Self {
            id: decode_field(record, "id")?,
            name: decode_field(record, "name")?,
            email: decode_field(record, "email")?,
            age: decode_field(record, "age")?,
            phone: decode_field(record, "phone")?,
            address: decode_field(record, "address")?,
        })
    }

    fn to_record(&self) -> Record {
        let mut record = Record::new();
        encode_field(&mut record, "id", self.id.as_ref());
        encode_field(&mut record, "name", self.name.as_ref());
        encode_field(&mut record, "email", self.email.as_ref());
        encode_field(&mut record, "age", self.age.as_ref());
        encode_field(&mut record, "phone", self.phone.as_ref());
        encode_field(&mut record, "address", self.address.as_ref());
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_round_trip_partial_user() {
        let user = User {
            name: Some("Ada".to_string()),
            age: Some(36),
            ..User::default()
        };
        let record = user.to_record();
        assert_eq!(record.len(), 2);

        let decoded = User::from_record(&record).unwrap();
        assert_eq!(decoded, user);
        assert!(decoded.id.is_none());
    }

    #[test]
    fn test_decode_rejects_wrong_age_type() {
        let mut record = Record::new();
        record.insert("age".to_string(), json!("thirty-six"));
        let err = User::from_record(&record).unwrap_err();
        assert_eq!(err.field, "age");
        assert_eq!(err.value, json!("thirty-six"));
    }

    #[test]
    fn test_encode_never_emits_null() {
        let record = User::default().to_record();
        assert!(record.is_empty());
    }
}
