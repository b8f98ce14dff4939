//! Product form rules and form-to-request coercion.

use serde::{Deserialize, Serialize};

use catalog_core::{ProductRequest, ProductResponse};

use crate::{FieldValue, ValidationError, ValidationResult, text_len, is_blank};

pub const NAME_REQUIRED: &str = "Product name is required";
pub const NAME_TOO_SHORT: &str = "Product name must be at least 3 characters";
pub const NAME_TOO_LONG: &str = "Product name must be less than 100 characters";
pub const PRICE_NOT_A_NUMBER: &str = "Price must be a valid number";
pub const PRICE_TOO_LOW: &str = "Price must be greater than 0";
pub const PRICE_TOO_HIGH: &str = "Price must be less than 999,999,999";
pub const QUANTITY_NOT_A_NUMBER: &str = "Quantity must be a valid number";
pub const QUANTITY_NEGATIVE: &str = "Quantity must be 0 or greater";
pub const QUANTITY_TOO_HIGH: &str = "Quantity must be less than 99,999";
pub const QUANTITY_NOT_WHOLE: &str = "Quantity must be a whole number";
pub const DESCRIPTION_TOO_LONG: &str = "Description must be less than 500 characters";
pub const CATEGORY_REQUIRED: &str = "Category is required";

const NAME_MIN: usize = 3;
const NAME_MAX: usize = 100;
const PRICE_MIN: f64 = 1.0;
const PRICE_MAX: f64 = 999_999_999.0;
const QUANTITY_MIN: f64 = 0.0;
const QUANTITY_MAX: f64 = 99_999.0;
const DESCRIPTION_MAX: usize = 500;

/// Raw product form input, before validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductFormData {
    pub name: String,
    pub price: FieldValue,
    pub quantity: FieldValue,
    #[serde(default)]
    pub description: String,
    pub category: String,
}

impl ProductFormData {
    /// Prefill an edit form from an existing product; numbers become text.
    pub fn from_response(product: &ProductResponse) -> Self {
        Self {
            name: product.name.clone(),
            price: FieldValue::Text(product.price.to_string()),
            quantity: FieldValue::Text(product.quantity.to_string()),
            description: product.description.clone(),
            category: product.category.clone(),
        }
    }

    pub fn validate(&self) -> ValidationResult {
        validate_product(self)
    }

    /// Validate, then coerce into the wire request.
    pub fn into_request(self) -> Result<ProductRequest, ValidationError> {
        validate_product(&self).into_result()?;

        let quantity = self.quantity.to_number();
        if quantity.fract() != 0.0 {
            return Err(ValidationError::new(vec![QUANTITY_NOT_WHOLE.to_string()]));
        }

        Ok(ProductRequest {
            name: self.name,
            price: self.price.to_number(),
            // In range [0, 99_999] after validation.
            quantity: quantity as i64,
            description: self.description,
            category: self.category,
        })
    }
}

pub fn validate_product(product: &ProductFormData) -> ValidationResult {
    let mut errors = Vec::new();

    if is_blank(&product.name) {
        errors.push(NAME_REQUIRED.to_string());
    } else {
        let len = text_len(&product.name);
        if len < NAME_MIN {
            errors.push(NAME_TOO_SHORT.to_string());
        }
        if len > NAME_MAX {
            errors.push(NAME_TOO_LONG.to_string());
        }
    }

    let price = product.price.to_number();
    if price.is_nan() {
        errors.push(PRICE_NOT_A_NUMBER.to_string());
    } else {
        if price < PRICE_MIN {
            errors.push(PRICE_TOO_LOW.to_string());
        }
        if price > PRICE_MAX {
            errors.push(PRICE_TOO_HIGH.to_string());
        }
    }

    let quantity = product.quantity.to_number();
    if quantity.is_nan() {
        errors.push(QUANTITY_NOT_A_NUMBER.to_string());
    } else {
        if quantity < QUANTITY_MIN {
            errors.push(QUANTITY_NEGATIVE.to_string());
        }
        if quantity > QUANTITY_MAX {
            errors.push(QUANTITY_TOO_HIGH.to_string());
        }
    }

    if text_len(&product.description) > DESCRIPTION_MAX {
        errors.push(DESCRIPTION_TOO_LONG.to_string());
    }

    if is_blank(&product.category) {
        errors.push(CATEGORY_REQUIRED.to_string());
    }

    ValidationResult::from_errors(errors)
}
