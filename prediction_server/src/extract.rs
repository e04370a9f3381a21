use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::{HeaderMap, header};
use serde::de::DeserializeOwned;
use serde_json::error::Category;

use crate::error::AppError;

/// JSON body extractor that reports which field failed to deserialize.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !json_content_type(req.headers()) {
            return Err(AppError::UnsupportedMediaType(
                "Expected request with `Content-Type: application/json`".into(),
            ));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

        parse_body(&bytes).map(ValidatedJson)
    }
}

/// `application/json` or any `application/*+json`, parameters ignored.
pub fn json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers.get(header::CONTENT_TYPE) else {
        return false;
    };
    let Ok(value) = value.to_str() else {
        return false;
    };

    let essence = value.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
    match essence.split_once('/') {
        Some(("application", subtype)) => subtype == "json" || subtype.ends_with("+json"),
        _ => false,
    }
}

pub fn parse_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, AppError> {
    let mut deserializer = serde_json::Deserializer::from_slice(bytes);

    let value = serde_path_to_error::deserialize(&mut deserializer).map_err(|err| {
        let path = err.path().to_string();
        let inner = err.into_inner();

        match inner.classify() {
            Category::Syntax | Category::Eof | Category::Io => {
                AppError::BadRequest(format!("Malformed JSON body: {inner}"))
            }
            Category::Data => {
                let message = inner.to_string();
                let field = missing_field(&message)
                    .unwrap_or(if path == "." { "body".to_string() } else { path });
                AppError::validation(field, message)
            }
        }
    })?;

    deserializer
        .end()
        .map_err(|e| AppError::BadRequest(format!("Malformed JSON body: {e}")))?;

    Ok(value)
}

/// serde reports a missing field against its parent, so recover the name from
/// "missing field `name`".
fn missing_field(message: &str) -> Option<String> {
    let rest = message.strip_prefix("missing field `")?;
    let end = rest.find('`')?;
    Some(rest[..end].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use volatility_model::PredictionRequest;

    fn field_of(err: AppError) -> String {
        match err {
            AppError::Validation(detail) => detail.field,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_parses_valid_body() {
        let body = br#"{"assetTicker":"BTC","upgradeDescription":"minor","predictionWindow":3}"#;
        let req: PredictionRequest = parse_body(body).unwrap();
        assert_eq!(req.prediction_window, 3);
    }

    #[test]
    fn test_wrong_type_names_field() {
        let body =
            br#"{"assetTicker":"BTC","upgradeDescription":"minor","predictionWindow":"five"}"#;
        let err = parse_body::<PredictionRequest>(body).unwrap_err();
        assert_eq!(field_of(err), "predictionWindow");
    }

    #[test]
    fn test_missing_field_names_field() {
        let body = br#"{"assetTicker":"BTC","predictionWindow":3}"#;
        let err = parse_body::<PredictionRequest>(body).unwrap_err();
        assert_eq!(field_of(err), "upgradeDescription");
    }

    #[test]
    fn test_malformed_json_is_bad_request() {
        let err = parse_body::<PredictionRequest>(b"{not json").unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_trailing_characters_are_bad_request() {
        let body = br#"{"assetTicker":"BTC","upgradeDescription":"minor","predictionWindow":3} trailing"#;
        let err = parse_body::<PredictionRequest>(body).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));

        let padded = b"{\"assetTicker\":\"BTC\",\"upgradeDescription\":\"minor\",\"predictionWindow\":3}  \n";
        assert!(parse_body::<PredictionRequest>(padded).is_ok());
    }

    fn headers(content_type: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, content_type.parse().unwrap());
        headers
    }

    #[test]
    fn test_json_content_type() {
        assert!(json_content_type(&headers("application/json")));
        assert!(json_content_type(&headers("application/json; charset=utf-8")));
        assert!(json_content_type(&headers("Application/JSON")));
        assert!(json_content_type(&headers("application/problem+json")));
        assert!(!json_content_type(&headers("text/plain")));
        assert!(!json_content_type(&headers("application/jsonx")));
        assert!(!json_content_type(&HeaderMap::new()));
    }

    #[test]
    fn test_missing_field_parser() {
        assert_eq!(
            missing_field("missing field `assetTicker` at line 1 column 2"),
            Some("assetTicker".to_string())
        );
        assert_eq!(missing_field("invalid type: string"), None);
    }
}
