//! Tests for the shared service plumbing
//!
//! Covers error mapping, retries, IAM token handling and credential files
//! against a local mock server.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use watson::core::config::{parse_credentials, read_credentials_file};
use watson::core::{
    BaseService, BasicAuthenticator, IamAuthenticator, NoAuthAuthenticator, RetryPolicy,
    ServiceOptions,
};
use watson::language_translator_v3::{LanguageTranslatorV3, ListLanguagesOptions};
use watson::WatsonError;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// The blocking client must be built, used and dropped off the async runtime
async fn run<T: Send + 'static>(f: impl FnOnce() -> T + Send + 'static) -> T {
    tokio::task::spawn_blocking(f)
        .await
        .expect("blocking task panicked")
}

fn languages_body() -> serde_json::Value {
    json!({ "languages": [{ "language": "en", "language_name": "English" }] })
}

// ============================================================================
// Error Mapping Tests
// ============================================================================

mod error_mapping_tests {
    use super::*;

    #[tokio::test]
    async fn test_error_message_from_error_field() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v3/languages"))
            .respond_with(
                ResponseTemplate::new(404)
                    .set_body_json(json!({ "error": "Model not found", "code": 404 })),
            )
            .mount(&server)
            .await;

        let uri = server.uri();
        let err = run(move || {
            let lt = LanguageTranslatorV3::new(
                "2018-05-01",
                ServiceOptions::new(Arc::new(NoAuthAuthenticator)).url(uri),
            )
            .unwrap();
            lt.list_languages(&ListLanguagesOptions::default())
                .unwrap_err()
        })
        .await;

        match &err {
            WatsonError::Http {
                status,
                message,
                body,
                ..
            } => {
                assert_eq!(*status, 404);
                assert_eq!(message, "Model not found");
                assert!(body.contains("Model not found"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.status_code(), Some(404));
    }

    #[tokio::test]
    async fn test_error_message_from_errors_array() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v3/languages"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "errors": [{ "code": "bad", "message": "Bad version" }],
                "trace": "abc"
            })))
            .mount(&server)
            .await;

        let uri = server.uri();
        let err = run(move || {
            let lt = LanguageTranslatorV3::new(
                "2018-05-01",
                ServiceOptions::new(Arc::new(NoAuthAuthenticator)).url(uri),
            )
            .unwrap();
            lt.list_languages(&ListLanguagesOptions::default())
                .unwrap_err()
        })
        .await;

        assert_eq!(err.to_string(), "HTTP 400: Bad version");
    }

    #[tokio::test]
    async fn test_error_message_falls_back_to_reason() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v3/languages"))
            .respond_with(ResponseTemplate::new(403).set_body_string("denied"))
            .mount(&server)
            .await;

        let uri = server.uri();
        let err = run(move || {
            let lt = LanguageTranslatorV3::new(
                "2018-05-01",
                ServiceOptions::new(Arc::new(NoAuthAuthenticator)).url(uri),
            )
            .unwrap();
            lt.list_languages(&ListLanguagesOptions::default())
                .unwrap_err()
        })
        .await;

        assert_eq!(err.status_code(), Some(403));
        assert!(err.to_string().contains("Forbidden"));
    }
}

// ============================================================================
// Retry Tests
// ============================================================================

mod retry_tests {
    use super::*;

    #[tokio::test]
    async fn test_retries_after_service_unavailable() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v3/languages"))
            .respond_with(ResponseTemplate::new(503).insert_header("Retry-After", "0"))
            .up_to_n_times(1)
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v3/languages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(languages_body()))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let count = run(move || {
            let mut lt = LanguageTranslatorV3::new(
                "2018-05-01",
                ServiceOptions::new(Arc::new(NoAuthAuthenticator)).url(uri),
            )
            .unwrap();
            lt.service_mut().enable_retries(2, Duration::from_secs(1));
            lt.list_languages(&ListLanguagesOptions::default())
                .unwrap()
                .into_result()
                .languages
                .len()
        })
        .await;

        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_gives_up_after_max_retries() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v3/languages"))
            .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "0"))
            .expect(3)
            .mount(&server)
            .await;

        let uri = server.uri();
        let status = run(move || {
            let mut lt = LanguageTranslatorV3::new(
                "2018-05-01",
                ServiceOptions::new(Arc::new(NoAuthAuthenticator)).url(uri),
            )
            .unwrap();
            lt.service_mut().enable_retries(2, Duration::from_secs(1));
            lt.list_languages(&ListLanguagesOptions::default())
                .unwrap_err()
                .status_code()
        })
        .await;

        assert_eq!(status, Some(429));
    }

    #[tokio::test]
    async fn test_no_retry_on_client_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v3/languages"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({ "error": "bad" })))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let status = run(move || {
            let mut lt = LanguageTranslatorV3::new(
                "2018-05-01",
                ServiceOptions::new(Arc::new(NoAuthAuthenticator)).url(uri),
            )
            .unwrap();
            lt.service_mut().enable_retries(3, Duration::from_secs(1));
            lt.list_languages(&ListLanguagesOptions::default())
                .unwrap_err()
                .status_code()
        })
        .await;

        assert_eq!(status, Some(400));
    }
}

// ============================================================================
// Authentication Tests
// ============================================================================

mod auth_tests {
    use super::*;

    #[tokio::test]
    async fn test_iam_token_is_fetched_once_and_reused() {
        let server = MockServer::start().await;
        let expiration = chrono::Utc::now().timestamp() + 3600;
        Mock::given(method("POST"))
            .and(path("/identity/token"))
            .and(body_string_contains("apikey=my-key"))
            .and(body_string_contains("grant_type=urn"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "access-1",
                "refresh_token": "refresh-1",
                "token_type": "Bearer",
                "expires_in": 3600,
                "expiration": expiration
            })))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v3/languages"))
            .and(header("Authorization", "Bearer access-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(languages_body()))
            .expect(2)
            .mount(&server)
            .await;

        let uri = server.uri();
        run(move || {
            let auth = IamAuthenticator::builder("my-key")
                .url(uri.clone())
                .build()
                .unwrap();
            let lt = LanguageTranslatorV3::new(
                "2018-05-01",
                ServiceOptions::new(Arc::new(auth)).url(uri),
            )
            .unwrap();
            lt.list_languages(&ListLanguagesOptions::default()).unwrap();
            lt.list_languages(&ListLanguagesOptions::default()).unwrap();
        })
        .await;
    }

    #[tokio::test]
    async fn test_iam_token_failure_is_authentication_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/identity/token"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({ "errorMessage": "bad key" })),
            )
            .mount(&server)
            .await;

        let uri = server.uri();
        let err = run(move || {
            let auth = IamAuthenticator::builder("bad-key")
                .url(uri.clone())
                .build()
                .unwrap();
            let lt = LanguageTranslatorV3::new(
                "2018-05-01",
                ServiceOptions::new(Arc::new(auth)).url(uri),
            )
            .unwrap();
            lt.list_languages(&ListLanguagesOptions::default())
                .unwrap_err()
        })
        .await;

        assert!(matches!(err, WatsonError::Authentication(_)));
    }

    #[tokio::test]
    async fn test_basic_auth_header() {
        let server = MockServer::start().await;
        // base64("user:pass")
        Mock::given(method("GET"))
            .and(path("/v3/languages"))
            .and(header("Authorization", "Basic dXNlcjpwYXNz"))
            .respond_with(ResponseTemplate::new(200).set_body_json(languages_body()))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        run(move || {
            let auth = BasicAuthenticator::new("user", "pass").unwrap();
            let lt = LanguageTranslatorV3::new(
                "2018-05-01",
                ServiceOptions::new(Arc::new(auth)).url(uri),
            )
            .unwrap();
            lt.list_languages(&ListLanguagesOptions::default()).unwrap();
        })
        .await;
    }
}

// ============================================================================
// Default Header Tests
// ============================================================================

mod header_tests {
    use super::*;
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_default_and_per_call_headers_are_sent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v3/languages"))
            .and(query_param("version", "2018-05-01"))
            .and(header("X-Default", "d"))
            .and(header("X-Call", "c"))
            .and(header(
                "X-IBMCloud-SDK-Analytics",
                "service_name=language_translator;service_version=V3;operation_id=ListLanguages",
            ))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("X-Global-Transaction-Id", "tx-1")
                    .set_body_json(languages_body()),
            )
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let (status, tx) = run(move || {
            let mut lt = LanguageTranslatorV3::new(
                "2018-05-01",
                ServiceOptions::new(Arc::new(NoAuthAuthenticator)).url(uri),
            )
            .unwrap();
            lt.service_mut()
                .set_default_headers(HashMap::from([("X-Default".to_string(), "d".to_string())]));
            let resp = lt
                .list_languages(&ListLanguagesOptions::default().header("X-Call", "c"))
                .unwrap();
            (
                resp.status_code,
                resp.header("X-Global-Transaction-Id").map(str::to_string),
            )
        })
        .await;

        assert_eq!(status, 200);
        assert_eq!(tx.as_deref(), Some("tx-1"));
    }
}

// ============================================================================
// Credentials File Tests
// ============================================================================

mod credentials_tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_credentials_skips_comments_and_quotes() {
        let contents = "\
# comment line

LANGUAGE_TRANSLATOR_APIKEY=\"abc123\"
LANGUAGE_TRANSLATOR_URL = https://example.com/lt
";
        let props = parse_credentials(contents);
        assert_eq!(props.len(), 2);
        assert_eq!(
            props.get("LANGUAGE_TRANSLATOR_APIKEY").map(String::as_str),
            Some("abc123")
        );
        assert_eq!(
            props.get("LANGUAGE_TRANSLATOR_URL").map(String::as_str),
            Some("https://example.com/lt")
        );
    }

    #[test]
    fn test_read_credentials_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "DISCOVERY_AUTH_TYPE=bearerToken").unwrap();
        writeln!(file, "DISCOVERY_BEARER_TOKEN=tok").unwrap();
        writeln!(file, "TONE_ANALYZER_APIKEY=other").unwrap();

        let props = read_credentials_file(file.path(), "discovery").unwrap();
        assert_eq!(props.len(), 2);
        assert_eq!(props.get("AUTH_TYPE").map(String::as_str), Some("bearerToken"));
        assert_eq!(props.get("BEARER_TOKEN").map(String::as_str), Some("tok"));
    }
}

// ============================================================================
// External Configuration Tests
// ============================================================================

mod external_config_tests {
    use super::*;
    use watson::core::RequestBuilder;

    // Each test uses its own service name so the variables never collide
    fn set_props(service: &str, props: &[(&str, &str)]) {
        for (prop, value) in props {
            std::env::set_var(format!("{}_{}", service, prop), value);
        }
    }

    #[test]
    fn test_configure_service_applies_url_ssl_and_retries() {
        set_props(
            "CONFIGURED_SERVICE",
            &[
                ("AUTH_TYPE", "noauth"),
                ("URL", "https://configured.example.com/api/"),
                ("DISABLE_SSL", "true"),
                ("ENABLE_RETRIES", "true"),
                ("MAX_RETRIES", "2"),
                ("RETRY_INTERVAL", "5"),
            ],
        );

        let options = ServiceOptions::from_environment("configured_service").unwrap();
        let mut service = BaseService::new(options, "https://default.example.com").unwrap();
        assert_eq!(service.service_url(), "https://configured.example.com/api");
        assert!(service.retry_policy().is_none());

        service.configure_service("configured_service").unwrap();
        assert!(service.http_config().disable_ssl_verification);
        assert_eq!(
            service.retry_policy(),
            Some(RetryPolicy {
                max_retries: 2,
                max_interval: Duration::from_secs(5),
            })
        );
    }

    #[tokio::test]
    async fn test_retries_enabled_from_environment() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v3/languages"))
            .respond_with(ResponseTemplate::new(503).insert_header("Retry-After", "0"))
            .up_to_n_times(1)
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v3/languages"))
            .respond_with(ResponseTemplate::new(200).set_body_json(languages_body()))
            .expect(1)
            .mount(&server)
            .await;

        set_props(
            "RETRYING_SERVICE",
            &[
                ("AUTH_TYPE", "noauth"),
                ("URL", server.uri().as_str()),
                ("ENABLE_RETRIES", "true"),
            ],
        );

        let status = run(|| {
            let options = ServiceOptions::from_environment("retrying_service").unwrap();
            let mut service = BaseService::new(options, "https://default.example.com").unwrap();
            service.configure_service("retrying_service").unwrap();

            let url = format!("{}/v3/languages", service.service_url());
            service
                .request_empty(&RequestBuilder::new(reqwest::Method::GET, url))
                .unwrap()
                .status_code
        })
        .await;

        assert_eq!(status, 200);
    }
}
