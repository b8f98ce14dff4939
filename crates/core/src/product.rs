//! Product catalog payloads.

use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned product identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl core::str::FromStr for ProductId {
    type Err = core::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// Body of `POST /products` and `PUT /products/{id}`.
///
/// Built from validated form input; never mutated once sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRequest {
    pub name: String,
    pub price: f64,
    pub quantity: i64,
    #[serde(default, deserialize_with = "nullable_string")]
    pub description: String,
    pub category: String,
}

/// A product as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductResponse {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub quantity: i64,
    #[serde(default, deserialize_with = "nullable_string")]
    pub description: String,
    pub category: String,
    pub active: bool,
}

impl ProductResponse {
    /// Attach server-owned fields to a submitted request.
    pub fn from_request(id: ProductId, request: ProductRequest, active: bool) -> Self {
        Self {
            id,
            name: request.name,
            price: request.price,
            quantity: request.quantity,
            description: request.description,
            category: request.category,
            active,
        }
    }
}

/// Optional listing filter for `GET /products`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

impl ProductFilter {
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn by_category(category: impl Into<String>) -> Self {
        Self {
            category: Some(category.into()),
            ..Self::default()
        }
    }

    /// Filter from free-text search inputs; empty inputs leave the field unset.
    pub fn search(name: &str, category: &str) -> Self {
        let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
        Self {
            name: non_empty(name),
            category: non_empty(category),
            ..Self::default()
        }
    }

    pub fn with_page(mut self, page: u32, size: u32) -> Self {
        self.page = Some(page);
        self.size = Some(size);
        self
    }

    /// Query-string pairs; unset fields are omitted.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(name) = &self.name {
            query.push(("name".to_string(), name.clone()));
        }
        if let Some(category) = &self.category {
            query.push(("category".to_string(), category.clone()));
        }
        if let Some(page) = self.page {
            query.push(("page".to_string(), page.to_string()));
        }
        if let Some(size) = self.size {
            query.push(("size".to_string(), size.to_string()));
        }
        query
    }
}

/// List envelope returned by `GET /products`.
///
/// Only `content` is guaranteed; paging metadata is present when the server pages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    pub content: Vec<ProductResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_elements: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

// The backend may send `"description": null` for products created without one.
fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn filter_omits_unset_fields() {
        let filter = ProductFilter::by_category("Electronics");
        assert_eq!(
            filter.to_query(),
            vec![("category".to_string(), "Electronics".to_string())]
        );

        assert!(ProductFilter::default().to_query().is_empty());
    }

    #[test]
    fn search_inputs_map_empty_to_unset() {
        let filter = ProductFilter::search("", "Kitchen");
        assert_eq!(filter.name, None);
        assert_eq!(filter.category.as_deref(), Some("Kitchen"));
        assert_eq!(ProductFilter::search("", ""), ProductFilter::default());
    }

    #[test]
    fn filter_keeps_declaration_order() {
        let filter = ProductFilter {
            name: Some("mug".to_string()),
            category: Some("Kitchen".to_string()),
            page: Some(1),
            size: Some(5),
        };
        let keys: Vec<_> = filter.to_query().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["name", "category", "page", "size"]);
    }

    #[test]
    fn product_response_accepts_null_description() {
        let product: ProductResponse = serde_json::from_value(json!({
            "id": 7,
            "name": "Test Product",
            "price": 100,
            "quantity": 10,
            "description": null,
            "category": "Electronics",
            "active": true,
        }))
        .unwrap();

        assert_eq!(product.id, ProductId(7));
        assert_eq!(product.description, "");
        assert_eq!(product.price, 100.0);
    }

    #[test]
    fn page_without_metadata_deserializes() {
        let page: ProductPage = serde_json::from_value(json!({ "content": [] })).unwrap();
        assert!(page.content.is_empty());
        assert_eq!(page.total_elements, None);
    }

    #[test]
    fn page_metadata_uses_camel_case() {
        let page = ProductPage {
            content: vec![],
            total_elements: Some(3),
            total_pages: Some(1),
            number: Some(0),
            size: Some(10),
        };
        let value = serde_json::to_value(&page).unwrap();
        assert_eq!(value["totalElements"], 3);
        assert_eq!(value["totalPages"], 1);
    }

    #[test]
    fn product_id_parses_from_path_segment() {
        assert_eq!("42".parse::<ProductId>().unwrap(), ProductId(42));
        assert!("abc".parse::<ProductId>().is_err());
    }
}
