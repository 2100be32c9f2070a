use estimator_core::errors::*;
use estimator_core::models::ComplexityMode;

#[test]
fn estimation_errors_carry_codes_and_question() {
    let missing = EstimationError::MissingRequiredAnswer {
        question_id: "complexity".to_string(),
        mode: ComplexityMode::Quick,
    };
    assert_eq!(missing.error_code(), "MISSING_REQUIRED_ANSWER");
    assert_eq!(missing.question_id(), "complexity");
    assert_eq!(
        missing.coded_string(),
        "[MISSING_REQUIRED_ANSWER] required question 'complexity' has no answer (quick mode)"
    );

    let unknown = EstimationError::UnknownOption {
        question_id: "complexity".to_string(),
        value: "Extreme".to_string(),
        expected: "one of 'Simple', 'Complex'".to_string(),
    };
    assert_eq!(unknown.error_code(), "UNKNOWN_OPTION");
    assert!(unknown.to_string().contains("'Extreme'"));
}

#[test]
fn aggregate_error_delegates_codes() {
    let err: EstimatorError = EstimationError::UnknownQuestion {
        question_id: "ghost".to_string(),
    }
    .into();
    assert_eq!(err.error_code(), "UNKNOWN_QUESTION");

    let err: EstimatorError = CatalogError::Integrity { violations: vec![] }.into();
    assert_eq!(err.error_code(), "CATALOG_INTEGRITY");

    let err: EstimatorError = ConfigError::InvalidValue {
        field: "pricing".to_string(),
        message: "bad".to_string(),
    }
    .into();
    assert_eq!(err.error_code(), "CONFIG_ERROR");
    assert!(err.to_string().starts_with("Configuration error:"));
}

#[test]
fn catalog_error_codes() {
    assert_eq!(
        CatalogError::FileNotFound { path: "x".into() }.error_code(),
        "CATALOG_NOT_FOUND"
    );
    assert_eq!(
        CatalogError::UnsupportedFormat { extension: "xml".into() }.error_code(),
        "CATALOG_PARSE_ERROR"
    );
}

#[test]
fn export_errors_convert_from_io() {
    let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
    let err: ExportError = io.into();
    assert_eq!(err.error_code(), "EXPORT_ERROR");
    assert!(err.to_string().contains("disk full"));
}
