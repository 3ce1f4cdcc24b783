use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{CatalogError, CatalogResult};
use crate::id::ProductId;

/// JSON names of the fields every product must carry, in document order.
pub const REQUIRED_FIELDS: [&str; 7] = [
    "name",
    "description",
    "color",
    "weight",
    "category",
    "price",
    "registrationDate",
];

/// Message returned when a create/update payload is incomplete.
pub const MISSING_FIELDS_MESSAGE: &str = "Todos os campos são obrigatórios!";

/// Candidate field values as received from a create/update request.
///
/// Absent and `null` values both deserialize to `None`. Numbers may also
/// arrive as numeric text (`"10"`, as form bodies always send them); blank
/// text for a number counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub weight: Option<f64>,
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub price: Option<f64>,
    pub registration_date: Option<String>,
}

/// The seven validated fields of a product.
///
/// `registration_date` is kept as the text the client sent; no date format is enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductFields {
    pub name: String,
    pub description: String,
    pub color: String,
    pub weight: f64,
    pub category: String,
    pub price: f64,
    pub registration_date: String,
}

/// A stored product: identity plus the full set of fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    #[schema(value_type = String, example = "01890a5d-ac96-774b-bcce-b302099a8057")]
    pub id: ProductId,
    #[serde(flatten)]
    pub fields: ProductFields,
}

impl Product {
    pub fn new(id: ProductId, fields: ProductFields) -> Self {
        Self { id, fields }
    }
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    struct LenientNumber;

    impl<'de> Visitor<'de> for LenientNumber {
        type Value = Option<f64>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a number or numeric text")
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            Ok(Some(v))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(Some(v as f64))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(Some(v as f64))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            let v = v.trim();
            if v.is_empty() {
                return Ok(None);
            }
            v.parse::<f64>()
                .map(Some)
                .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
            d.deserialize_any(self)
        }
    }

    deserializer.deserialize_any(LenientNumber)
}

fn text_missing(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(|s| s.trim().is_empty())
}

impl ProductDraft {
    /// JSON names of the fields that are absent, `null` or blank.
    ///
    /// Numbers only need to be present: `0` is a legitimate weight or price.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let checks = [
            text_missing(&self.name),
            text_missing(&self.description),
            text_missing(&self.color),
            self.weight.is_none(),
            text_missing(&self.category),
            self.price.is_none(),
            text_missing(&self.registration_date),
        ];

        REQUIRED_FIELDS
            .iter()
            .zip(checks)
            .filter_map(|(field, missing)| missing.then_some(*field))
            .collect()
    }

    /// Turn the draft into a complete field set, or fail with `CatalogError::Validation`.
    pub fn validate(self) -> CatalogResult<ProductFields> {
        if !self.missing_fields().is_empty() {
            return Err(CatalogError::validation(MISSING_FIELDS_MESSAGE));
        }

        match self {
            ProductDraft {
                name: Some(name),
                description: Some(description),
                color: Some(color),
                weight: Some(weight),
                category: Some(category),
                price: Some(price),
                registration_date: Some(registration_date),
            } => Ok(ProductFields {
                name,
                description,
                color,
                weight,
                category,
                price,
                registration_date,
            }),
            _ => Err(CatalogError::validation(MISSING_FIELDS_MESSAGE)),
        }
    }
}

impl From<ProductFields> for ProductDraft {
    fn from(fields: ProductFields) -> Self {
        Self {
            name: Some(fields.name),
            description: Some(fields.description),
            color: Some(fields.color),
            weight: Some(fields.weight),
            category: Some(fields.category),
            price: Some(fields.price),
            registration_date: Some(fields.registration_date),
        }
    }
}
