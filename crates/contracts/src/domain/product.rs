use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

/// Товар магазина
///
/// `id` назначается коллекцией на сервере при создании и далее неизменен.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,

    pub name: String,

    /// Цена хранится как введённый текст. Сервер может вернуть её
    /// либо строкой, либо числом — при чтении обе формы приводятся к тексту.
    #[serde(deserialize_with = "price_from_number_or_string")]
    pub price: String,
}

impl Product {
    /// Цена для отображения: два знака после запятой,
    /// либо исходный текст, если он не разбирается как число.
    pub fn price_display(&self) -> String {
        match self.price.trim().parse::<f64>() {
            Ok(v) => format!("{:.2}", v),
            Err(_) => self.price.clone(),
        }
    }
}

// ============================================================================
// DTO
// ============================================================================

/// Тело запроса create/update: `id` не передаётся, его ведёт сервер.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    pub name: String,
    pub price: String,
}

fn price_from_number_or_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    use serde_json::Value;

    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "price: expected string or number, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_accepts_string_and_number() {
        let from_string: Product =
            serde_json::from_str(r#"{"id":"1","name":"Mouse","price":"50.00"}"#).unwrap();
        assert_eq!(from_string.price, "50.00");

        let from_number: Product =
            serde_json::from_str(r#"{"id":"2","name":"Keyboard","price":199.9}"#).unwrap();
        assert_eq!(from_number.price, "199.9");
    }

    #[test]
    fn test_price_rejects_other_types() {
        let result: Result<Product, _> =
            serde_json::from_str(r#"{"id":"3","name":"Cable","price":null}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_price_display() {
        let p = Product {
            id: "1".to_string(),
            name: "Mouse".to_string(),
            price: "50".to_string(),
        };
        assert_eq!(p.price_display(), "50.00");

        let raw = Product {
            id: "2".to_string(),
            name: "Mystery".to_string(),
            price: "n/a".to_string(),
        };
        assert_eq!(raw.price_display(), "n/a");
    }

    #[test]
    fn test_dto_body_shape() {
        let dto = ProductDto {
            name: "Mouse Pro".to_string(),
            price: "50.00".to_string(),
        };
        let body = serde_json::to_string(&dto).unwrap();
        assert_eq!(body, r#"{"name":"Mouse Pro","price":"50.00"}"#);
    }
}
