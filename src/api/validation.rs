//! Validation of incoming bookmark payloads.
//! Checks run in a fixed order and stop at the first failing field.

use serde_json::{Map, Value};
use url::Url;

use crate::{database::models::NewBookmark, errors::AppError};

/// Presence is checked in exactly this order.
pub const REQUIRED_FIELDS: [&str; 3] = ["title", "url", "rating"];

pub const MIN_RATING: i64 = 1;
pub const MAX_RATING: i64 = 5;

/// Reports the first required field whose value is absent or falsy: `null`, `false`,
/// `""`, or zero.
pub fn ensure_required_fields(payload: &Map<String, Value>) -> Result<(), AppError> {
    for field in REQUIRED_FIELDS {
        let missing = match payload.get(field) {
            None | Some(Value::Null) => true,
            Some(Value::Bool(b)) => !b,
            Some(Value::String(s)) => s.is_empty(),
            Some(Value::Number(n)) => n.as_f64() == Some(0.0),
            Some(Value::Array(_) | Value::Object(_)) => false,
        };
        if missing {
            log::error!("{} is required", field);
            return Err(AppError::MissingField(field));
        }
    }
    Ok(())
}

/// Full domain check: title, then url, then rating, then the optional description.
pub fn validate_new_bookmark(payload: &Map<String, Value>) -> Result<NewBookmark, AppError> {
    let title = required_text(payload, "title")?;

    let url = required_text(payload, "url")?;
    if !is_web_uri(&url) {
        return Err(invalid("url", "must be a valid absolute http(s) URL"));
    }

    let rating = match payload.get("rating").and_then(Value::as_i64) {
        Some(r) if (MIN_RATING..=MAX_RATING).contains(&r) => r as i32,
        _ => return Err(invalid("rating", "must be an integer between 1 and 5")),
    };

    let description = match payload.get("description") {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(_) => return Err(invalid("description", "must be a string")),
    };

    Ok(NewBookmark {
        title,
        url,
        description,
        rating,
    })
}

/// Absolute URI with an http or https scheme and a host.
pub fn is_web_uri(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(url) => {
            matches!(url.scheme(), "http" | "https")
                && url.host_str().is_some_and(|host| !host.is_empty())
        }
        Err(_) => false,
    }
}

fn required_text(payload: &Map<String, Value>, field: &'static str) -> Result<String, AppError> {
    let value = payload
        .get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| invalid(field, "must be a string"))?;

    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(invalid(field, "must not be empty"));
    }
    Ok(trimmed.to_string())
}

fn invalid(field: &'static str, reason: &'static str) -> AppError {
    log::error!("Invalid '{}' supplied: {}", field, reason);
    AppError::InvalidField { field, reason }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("test payload must be an object"),
        }
    }

    fn failing_field(result: Result<impl std::fmt::Debug, AppError>) -> &'static str {
        match result {
            Err(AppError::MissingField(f)) => f,
            Err(AppError::InvalidField { field, .. }) => field,
            other => panic!("expected a field error, got {:?}", other),
        }
    }

    #[test]
    fn presence_is_checked_in_order() {
        let body = payload(json!({ "rating": 3 }));
        assert_eq!(failing_field(ensure_required_fields(&body)), "title");

        let body = payload(json!({ "title": "t", "url": null }));
        assert_eq!(failing_field(ensure_required_fields(&body)), "url");

        let body = payload(json!({ "title": "t", "url": "https://a.b", "rating": "" }));
        assert_eq!(failing_field(ensure_required_fields(&body)), "rating");
    }

    #[test]
    fn falsy_values_count_as_missing() {
        for value in [json!(false), json!(0), json!(0.0), json!(-0.0), json!("")] {
            let body = payload(json!({ "title": "t", "url": "https://a.b", "rating": value }));
            assert_eq!(failing_field(ensure_required_fields(&body)), "rating");
        }

        let body = payload(json!({ "title": "t", "url": true, "rating": -1 }));
        assert!(ensure_required_fields(&body).is_ok());
    }

    #[test]
    fn normalizes_a_valid_payload() {
        let body = payload(json!({
            "title": "  Rust Book ",
            "url": " https://doc.rust-lang.org/book/ ",
            "rating": 5
        }));
        let bookmark = validate_new_bookmark(&body).unwrap();
        assert_eq!(bookmark.title, "Rust Book");
        assert_eq!(bookmark.url, "https://doc.rust-lang.org/book/");
        assert_eq!(bookmark.description, "");
        assert_eq!(bookmark.rating, 5);
    }

    #[test]
    fn stops_at_first_invalid_field() {
        let body = payload(json!({ "title": "   ", "url": "nope", "rating": 9 }));
        assert_eq!(failing_field(validate_new_bookmark(&body)), "title");

        let body = payload(json!({ "title": "ok", "url": "nope", "rating": 9 }));
        assert_eq!(failing_field(validate_new_bookmark(&body)), "url");
    }

    #[test]
    fn rating_must_be_an_integer_in_range() {
        for rating in [json!(0), json!(6), json!(-1), json!(2.5), json!("3"), json!(true)] {
            let body = payload(json!({ "title": "t", "url": "https://a.b", "rating": rating }));
            assert_eq!(failing_field(validate_new_bookmark(&body)), "rating");
        }
    }

    #[test]
    fn description_must_be_text_when_present() {
        let body = payload(json!({
            "title": "t", "url": "https://a.b", "rating": 1, "description": 42
        }));
        assert_eq!(failing_field(validate_new_bookmark(&body)), "description");

        let body = payload(json!({
            "title": "t", "url": "https://a.b", "rating": 1, "description": null
        }));
        assert_eq!(validate_new_bookmark(&body).unwrap().description, "");
    }

    #[test]
    fn web_uri_rules() {
        assert!(is_web_uri("http://localhost:8000/x?y=1"));
        assert!(is_web_uri("https://example.com"));
        assert!(!is_web_uri("example.com"));
        assert!(!is_web_uri("/relative/path"));
        assert!(!is_web_uri("ftp://example.com"));
        assert!(!is_web_uri("javascript:alert(1)"));
        assert!(!is_web_uri("mailto:someone@example.com"));
    }
}
