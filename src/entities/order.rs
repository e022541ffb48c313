//! Example `order` entity.

use chrono::{DateTime, Utc};

use crate::rest::{decode_field, encode_field, DecodeError, Entity, Record};

/// An order record projected onto a fixed shape, including server-managed
/// timestamps.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Order {
    /// Record id.
    pub id: Option<String>,
    /// Id of the ordering user.
    pub user_id: Option<String>,
    /// Id of the ordered product.
    pub product_id: Option<String>,
    /// Ordered quantity.
    pub quantity: Option<i64>,
    /// Total amount.
    pub amount: Option<f64>,
    /// Order status.
    pub status: Option<String>,
    /// Creation timestamp, set by the server.
    pub create_time: Option<DateTime<Utc>>,
    /// Last-update timestamp, set by the server.
    pub update_time: Option<DateTime<Utc>>,
}

impl Entity for Order {
    const MODEL: &'static str = "order";

    fn from_record(record: &Record) -> Result<Self, DecodeError> {
        Ok(Self {
            id: decode_field(record, "id")?,
            user_id: decode_field(record, "user_id")?,
            product_id: decode_field(record, "product_id")?,
            quantity: decode_field(record, "quantity")?,
            amount: decode_field(record, "amount")?,
            status: decode_field(record, "status")?,
            create_time: decode_field(record, "create_time")?,
            update_time: decode_field(record, "update_time")?,
        })
    }

    fn to_record(&self) -> Record {
        let mut record = Record::new();
        encode_field(&mut record, "id", self.id.as_ref());
        encode_field(&mut record, "user_id", self.user_id.as_ref());
        encode_field(&mut record, "product_id", self.product_id.as_ref());
        encode_field(&mut record, "quantity", self.quantity.as_ref());
        encode_field(&mut record, "amount", self.amount.as_ref());
        encode_field(&mut record, "status", self.status.as_ref());
        encode_field(&mut record, "create_time", self.create_time.as_ref());
        encode_field(&mut record, "update_time", self.update_time.as_ref());
        record
    }
}
