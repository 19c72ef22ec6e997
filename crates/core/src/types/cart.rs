//! Cart line items and the product payload they capture.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::id::ProductId;

/// A product as handed to the cart by a catalog or product page.
///
/// Beyond the identifier, product payloads are passthrough data: name,
/// price, image URL, and whatever else the catalog attaches travel with
/// the product as untyped fields and are captured verbatim into a cart
/// line at add time. The cart never validates or reshapes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product identifier.
    pub id: ProductId,
    /// Arbitrary catalog fields, serialized inline alongside `id`.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Product {
    /// Create a product with no extra fields.
    pub fn new(id: impl Into<ProductId>) -> Self {
        Self {
            id: id.into(),
            fields: Map::new(),
        }
    }

    /// Attach a catalog field, builder style.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }
}

/// One line item in the cart: a captured product plus an aggregated quantity.
///
/// ## Invariants
///
/// - At most one line per distinct product `id` in a cart.
/// - `quantity` is always ≥ 1 (enforced by quantity coercion at the
///   add-to-cart boundary).
///
/// The serialized form inlines the captured fields next to `id` and
/// `quantity`, so the durable slot holds plain product-shaped objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Product identifier this line aggregates.
    pub id: ProductId,
    /// Product fields captured verbatim at add time. Deliberately not
    /// refreshed when the same product is added again.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
    /// Aggregated quantity, always ≥ 1.
    pub quantity: u32,
}

impl CartLine {
    /// Capture a product into a new line with the given quantity.
    #[must_use]
    pub fn capture(product: &Product, quantity: u32) -> Self {
        Self {
            id: product.id.clone(),
            fields: product.fields.clone(),
            quantity,
        }
    }

    /// The captured unit price.
    ///
    /// A missing or non-numeric `price` field yields `NaN`, which then
    /// propagates through totals. That is deliberate: the cart displays
    /// whatever the catalog provided rather than silently repairing it.
    #[must_use]
    pub fn price(&self) -> f64 {
        self.fields
            .get("price")
            .and_then(Value::as_f64)
            .unwrap_or(f64::NAN)
    }

    /// Price times quantity for this line.
    #[must_use]
    pub fn line_total(&self) -> f64 {
        self.price() * f64::from(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: i64, price: f64) -> Product {
        Product::new(id).with_field("price", price)
    }

    #[test]
    fn test_capture_copies_fields_verbatim() {
        let p = product(1, 10.0).with_field("name", "Tea");
        let line = CartLine::capture(&p, 2);
        assert_eq!(line.id, ProductId::Int(1));
        assert_eq!(line.fields, p.fields);
        assert_eq!(line.quantity, 2);
    }

    #[test]
    fn test_price_reads_captured_field() {
        let line = CartLine::capture(&product(1, 12.5), 1);
        assert!((line.price() - 12.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_price_is_nan() {
        let line = CartLine::capture(&Product::new(1), 3);
        assert!(line.price().is_nan());
        assert!(line.line_total().is_nan());
    }

    #[test]
    fn test_non_numeric_price_is_nan() {
        let p = Product::new(1).with_field("price", "free");
        let line = CartLine::capture(&p, 1);
        assert!(line.price().is_nan());
    }

    #[test]
    fn test_serialized_form_inlines_fields() {
        let line = CartLine::capture(&product(3, 5.0).with_field("name", "Mug"), 2);
        let json: Value = serde_json::to_value(&line).expect("serializes");
        assert_eq!(json["id"], 3);
        assert_eq!(json["name"], "Mug");
        assert_eq!(json["price"], 5.0);
        assert_eq!(json["quantity"], 2);
    }

    #[test]
    fn test_round_trip() {
        let line = CartLine::capture(&product(7, 9.99).with_field("image", "/img/7.png"), 4);
        let json = serde_json::to_string(&line).expect("serializes");
        let back: CartLine = serde_json::from_str(&json).expect("parses");
        assert_eq!(back, line);
    }
}
