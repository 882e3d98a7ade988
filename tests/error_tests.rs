//! Tests for error handling
//!
//! Covers WatsonError variants, their messages, conversions and the
//! validation performed before any request is sent.

use std::sync::Arc;

use watson::core::{NoAuthAuthenticator, ServiceOptions};
use watson::error::{Result, WatsonError};

// ============================================================================
// WatsonError Variant Tests
// ============================================================================

mod error_variant_tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = WatsonError::validation("text must not be empty");
        assert_eq!(err.to_string(), "Invalid argument: text must not be empty");
        assert_eq!(err.status_code(), None);
    }

    #[test]
    fn test_invalid_service_url_error() {
        let err = WatsonError::InvalidServiceUrl("https://{region}.example.com".to_string());
        let msg = err.to_string();
        assert!(msg.contains("Invalid service URL"));
        assert!(msg.contains("{region}"));
    }

    #[test]
    fn test_configuration_error() {
        let err = WatsonError::Configuration("missing property APIKEY".to_string());
        assert!(err.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_authentication_error() {
        let err = WatsonError::Authentication("token expired".to_string());
        assert_eq!(err.to_string(), "Authentication failed: token expired");
    }

    #[test]
    fn test_http_error_carries_status() {
        let err = WatsonError::Http {
            status: 404,
            message: "Resource not found".to_string(),
            headers: Default::default(),
            body: r#"{"error":"Resource not found"}"#.to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 404: Resource not found");
        assert_eq!(err.status_code(), Some(404));
    }
}

// ============================================================================
// Conversion Tests
// ============================================================================

mod conversion_tests {
    use super::*;

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err: WatsonError = io.into();
        assert!(matches!(err, WatsonError::Io(_)));
        assert!(err.to_string().contains("no such file"));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: WatsonError = json_err.into();
        assert!(matches!(err, WatsonError::Json(_)));
    }

    #[test]
    fn test_question_mark_propagation() {
        fn read() -> Result<String> {
            Ok(std::fs::read_to_string("/definitely/not/a/real/path")?)
        }
        assert!(matches!(read(), Err(WatsonError::Io(_))));
    }
}

// ============================================================================
// Validation Tests
// ============================================================================

mod validation_tests {
    use super::*;
    use watson::tone_analyzer_v3::{ToneAnalyzerV3, ToneContent, ToneOptions};

    fn options() -> ServiceOptions {
        ServiceOptions::new(Arc::new(NoAuthAuthenticator))
    }

    #[test]
    fn test_empty_version_rejected() {
        let err = ToneAnalyzerV3::new("", options()).unwrap_err();
        assert!(matches!(err, WatsonError::Validation(_)));
    }

    #[test]
    fn test_service_url_with_braces_rejected() {
        let err = ToneAnalyzerV3::new("2017-09-21", options().url("https://{region}.example.com"))
            .unwrap_err();
        assert!(matches!(err, WatsonError::InvalidServiceUrl(_)));
    }

    #[test]
    fn test_service_url_trailing_slash_trimmed() {
        let analyzer =
            ToneAnalyzerV3::new("2017-09-21", options().url("https://example.com/api/")).unwrap();
        assert_eq!(analyzer.service().service_url(), "https://example.com/api");
    }

    #[test]
    fn test_blank_text_rejected_before_request() {
        // Unroutable URL: any request attempt would fail with a transport error
        let analyzer =
            ToneAnalyzerV3::new("2017-09-21", options().url("http://127.0.0.1:1")).unwrap();
        let err = analyzer
            .tone(&ToneOptions::new(ToneContent::Text("   ".to_string())))
            .unwrap_err();
        assert!(matches!(err, WatsonError::Validation(_)));
    }
}
