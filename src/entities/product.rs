//! Example `product` entity.

use crate::rest::{decode_field, encode_field, DecodeError, Entity, Record};

/// A product record projected onto a fixed shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Product {
    /// Record id.
    pub id: Option<String>,
    /// Product name.
    pub name: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
    /// Unit price.
    pub price: Option<f64>,
    /// Units in stock.
    pub stock: Option<i64>,
    /// Category name.
    pub category: Option<String>,
    /// Lifecycle status.
    pub status: Option<String>,
}

impl Entity for Product {
    const MODEL: &'static str = "product";

    fn from_record(record: &Record) -> Result<Self, DecodeError> {
        Ok(Self {
            id: decode_field(record, "id")?,
            name: decode_field(record, "name")?,
            description: decode_field(record, "description")?,
            price: decode_field(record, "price")?,
            stock: decode_field(record, "stock")?,
            category: decode_field(record, "category")?,
            status: decode_field(record, "status")?,
        })
    }

    fn to_record(&self) -> Record {
        let mut record = Record::new();
        encode_field(&mut record, "id", self.id.as_ref());
        encode_field(&mut record, "name", self.name.as_ref());
        encode_field(&mut record, "description", self.description.as_ref());
        encode_field(&mut record, "price", self.price.as_ref());
        encode_field(&mut record, "stock", self.stock.as_ref());
        encode_field(&mut record, "category", self.category.as_ref());
        encode_field(&mut record, "status", self.status.as_ref());
        record
    }
}
