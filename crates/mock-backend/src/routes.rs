use catalog_core::http::Method;

/// The logical endpoints the mock answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    ListProducts,
    GetProduct,
    CreateProduct,
    UpdateProduct,
    DeleteProduct,
}

impl Route {
    /// Match a method and API-relative path. Returns the route and its `:id` segment.
    pub fn resolve<'a>(method: &Method, path: &'a str) -> Option<(Self, Option<&'a str>)> {
        let trimmed = path.trim_matches('/');
        let segments: Vec<&str> = trimmed.split('/').collect();

        match (method.as_str(), segments.as_slice()) {
            ("POST", ["auth", "login"]) => Some((Self::Login, None)),
            ("GET", ["products"]) => Some((Self::ListProducts, None)),
            ("POST", ["products"]) => Some((Self::CreateProduct, None)),
            ("GET", ["products", id]) => Some((Self::GetProduct, Some(*id))),
            ("PUT", ["products", id]) => Some((Self::UpdateProduct, Some(*id))),
            ("DELETE", ["products", id]) => Some((Self::DeleteProduct, Some(*id))),
            _ => None,
        }
    }

    /// Product routes are protected when the backend requires auth; login never is.
    pub fn is_protected(self) -> bool {
        !matches!(self, Self::Login)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_all_routes() {
        assert_eq!(
            Route::resolve(&Method::POST, "/auth/login"),
            Some((Route::Login, None))
        );
        assert_eq!(
            Route::resolve(&Method::GET, "/products"),
            Some((Route::ListProducts, None))
        );
        assert_eq!(
            Route::resolve(&Method::POST, "/products/"),
            Some((Route::CreateProduct, None))
        );
        assert_eq!(
            Route::resolve(&Method::GET, "/products/7"),
            Some((Route::GetProduct, Some("7")))
        );
        assert_eq!(
            Route::resolve(&Method::PUT, "/products/7"),
            Some((Route::UpdateProduct, Some("7")))
        );
        assert_eq!(
            Route::resolve(&Method::DELETE, "/products/abc"),
            Some((Route::DeleteProduct, Some("abc")))
        );
    }

    #[test]
    fn unknown_routes_do_not_match() {
        assert_eq!(Route::resolve(&Method::GET, "/auth/login"), None);
        assert_eq!(Route::resolve(&Method::PATCH, "/products/1"), None);
        assert_eq!(Route::resolve(&Method::GET, "/products/1/extra"), None);
        assert_eq!(Route::resolve(&Method::GET, "/"), None);
    }

    #[test]
    fn only_login_is_public() {
        assert!(!Route::Login.is_protected());
        assert!(Route::ListProducts.is_protected());
        assert!(Route::DeleteProduct.is_protected());
    }
}
