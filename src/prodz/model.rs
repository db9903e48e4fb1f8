use serde::{Deserialize, Serialize};

/// Longest product name the catalog will keep, in characters.
/// Anything longer is silently cut at this bound, both at construction
/// and when a patch replaces the name.
pub const MAX_NAME_CHARS: usize = 49;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Intended-unique key. Uniqueness is not enforced anywhere; lookups
    /// resolve duplicates to the earliest inserted match.
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub quantity: i64,
}

impl Product {
    pub fn new(id: i64, name: &str, price: f64, quantity: i64) -> Self {
        Self {
            id,
            name: bound_name(name),
            price,
            quantity,
        }
    }

    pub(crate) fn set_name(&mut self, name: &str) {
        self.name = bound_name(name);
    }
}

fn bound_name(name: &str) -> String {
    name.chars().take(MAX_NAME_CHARS).collect()
}

/// Partial update request for a product.
///
/// Each field is independently present (`Some`, replace) or absent (`None`,
/// leave unchanged), so "no change" never collides with a legitimate value:
/// a negative price or an empty name are expressible updates. The id is not
/// part of the patch and can never change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
}

impl ProductPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn quantity(mut self, quantity: i64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.quantity.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_short_names_intact() {
        let p = Product::new(1, "Mechanical Keyboard", 350.0, 15);
        assert_eq!(p.name, "Mechanical Keyboard");
    }

    #[test]
    fn truncates_long_names_to_the_bound() {
        let long = "x".repeat(120);
        let p = Product::new(1, &long, 1.0, 1);
        assert_eq!(p.name.chars().count(), MAX_NAME_CHARS);
    }

    #[test]
    fn truncates_on_char_boundaries() {
        let long: String = "é".repeat(60);
        let p = Product::new(1, &long, 1.0, 1);
        assert_eq!(p.name.chars().count(), MAX_NAME_CHARS);
        assert!(p.name.chars().all(|c| c == 'é'));
    }

    #[test]
    fn empty_patch_reports_empty() {
        assert!(ProductPatch::new().is_empty());
        assert!(!ProductPatch::new().price(9.99).is_empty());
    }

    #[test]
    fn patch_builder_sets_each_field() {
        let patch = ProductPatch::new().name("Widget").price(9.99).quantity(3);
        assert_eq!(patch.name.as_deref(), Some("Widget"));
        assert_eq!(patch.price, Some(9.99));
        assert_eq!(patch.quantity, Some(3));
    }
}
