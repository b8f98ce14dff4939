//! Canned data served by the mock.

use catalog_core::{ProductId, ProductResponse};

pub const VALID_USERNAME: &str = "validuser";
pub const VALID_PASSWORD: &str = "validpass123";

/// Token issued for a successful login.
pub const MOCK_TOKEN: &str = "jwt-token";

pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful";
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials";

fn product(
    id: i64,
    name: &str,
    price: f64,
    quantity: i64,
    description: &str,
    category: &str,
    active: bool,
) -> ProductResponse {
    ProductResponse {
        id: ProductId(id),
        name: name.to_string(),
        price,
        quantity,
        description: description.to_string(),
        category: category.to_string(),
        active,
    }
}

/// Record returned for `GET /products/{id}` when `id` is not a fixture.
pub fn canned_product(id: ProductId) -> ProductResponse {
    ProductResponse {
        id,
        ..product(0, "Test Product", 100.0, 10, "Test Description", "Electronics", true)
    }
}

/// Default catalog. Includes one inactive (soft-deleted) product.
pub fn products() -> Vec<ProductResponse> {
    vec![
        canned_product(ProductId(1)),
        product(2, "Wireless Mouse", 25.0, 150, "Ergonomic 2.4GHz mouse", "Electronics", true),
        product(3, "Coffee Mug", 12.0, 40, "Ceramic, 350ml", "Kitchen", true),
        product(4, "Desk Lamp", 45.0, 0, "LED lamp with dimmer", "Home", true),
        product(5, "Steel Kettle", 30.0, 5, "Discontinued model", "Kitchen", false),
    ]
}
