use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Quote
// ============================================================================

/// Снимок цены и остатка товара, который отдаёт `GET /api/producto/{id}`.
///
/// Сервер исторически отдаёт испанские имена полей (`precio`, `nombre`),
/// поэтому они принимаются как синонимы.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductQuote {
    #[serde(alias = "precio")]
    pub price: f64,
    pub stock: i64,
    #[serde(default, alias = "nombre", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

// ============================================================================
// Wire payload
// ============================================================================

/// Raw body of the product endpoint: either a quote or `{ "error": ... }`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductInfoPayload {
    #[serde(default)]
    pub error: Option<serde_json::Value>,
    #[serde(default, alias = "precio")]
    pub price: Option<f64>,
    #[serde(default)]
    pub stock: Option<i64>,
    #[serde(default, alias = "nombre")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProductInfoError {
    /// Сервер явно сообщил об ошибке в теле ответа.
    #[error("product lookup rejected: {0}")]
    Rejected(String),
    /// Тело разобрано, но в нём нет цены или остатка.
    #[error("malformed product payload: {0}")]
    Malformed(String),
}

impl ProductInfoPayload {
    /// Returns the server-reported error, if the `error` field is truthy.
    pub fn rejection(&self) -> Option<String> {
        let value = self.error.as_ref()?;
        if !is_truthy(value) {
            return None;
        }
        Some(match value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }

    pub fn into_quote(self) -> Result<ProductQuote, ProductInfoError> {
        if let Some(reason) = self.rejection() {
            return Err(ProductInfoError::Rejected(reason));
        }
        let price = self
            .price
            .filter(|p| p.is_finite())
            .ok_or_else(|| ProductInfoError::Malformed("missing price".into()))?;
        let stock = self
            .stock
            .ok_or_else(|| ProductInfoError::Malformed("missing stock".into()))?;
        Ok(ProductQuote {
            price,
            stock,
            name: self.name,
        })
    }
}

/// Decode a response body. JSON syntax errors are reported as `Malformed`.
pub fn decode_product_info(body: &str) -> Result<ProductQuote, ProductInfoError> {
    let payload: ProductInfoPayload =
        serde_json::from_str(body).map_err(|e| ProductInfoError::Malformed(e.to_string()))?;
    payload.into_quote()
}

// Mirrors JavaScript truthiness for the `error` field.
fn is_truthy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(b) => *b,
        serde_json::Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        serde_json::Value::String(s) => !s.is_empty(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_spanish_fields() {
        let quote = decode_product_info(r#"{"precio": 19.99, "stock": 3, "nombre": "Mesa"}"#)
            .unwrap();
        assert_eq!(quote.price, 19.99);
        assert_eq!(quote.stock, 3);
        assert_eq!(quote.name.as_deref(), Some("Mesa"));
    }

    #[test]
    fn test_decode_english_fields() {
        let quote = decode_product_info(r#"{"price": 5, "stock": 12}"#).unwrap();
        assert_eq!(quote.price, 5.0);
        assert_eq!(quote.stock, 12);
        assert_eq!(quote.name, None);
    }

    #[test]
    fn test_error_payload_is_rejected() {
        let err = decode_product_info(r#"{"error": "Producto no encontrado"}"#).unwrap_err();
        assert_eq!(
            err,
            ProductInfoError::Rejected("Producto no encontrado".to_string())
        );

        let err = decode_product_info(r#"{"error": true}"#).unwrap_err();
        assert_eq!(err, ProductInfoError::Rejected("true".to_string()));
    }

    #[test]
    fn test_falsy_error_is_ignored() {
        let quote = decode_product_info(r#"{"error": null, "precio": 1.5, "stock": 2}"#).unwrap();
        assert_eq!(quote.stock, 2);

        let quote = decode_product_info(r#"{"error": "", "precio": 1.5, "stock": 2}"#).unwrap();
        assert_eq!(quote.price, 1.5);
    }

    #[test]
    fn test_malformed_payloads() {
        assert!(matches!(
            decode_product_info("<html>"),
            Err(ProductInfoError::Malformed(_))
        ));
        assert!(matches!(
            decode_product_info(r#"{"stock": 4}"#),
            Err(ProductInfoError::Malformed(_))
        ));
        assert!(matches!(
            decode_product_info(r#"{"precio": 4.0}"#),
            Err(ProductInfoError::Malformed(_))
        ));
    }
}
