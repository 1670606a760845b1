//! Unit tests for the AppError taxonomy and serialization contract.
//!
//! AppError is the conventional failure payload: a closed ErrorKind, a
//! message, an optional cause chain, and a JSON-safe context map. The
//! `to_json` record is the hand-off point to log sinks and must always be
//! flat: code, message, context, and a message-only causeChain.

use outcomes::{AppError, ErrorKind};
use rstest::rstest;
use serde_json::json;

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn new_sets_kind_and_message() {
    let error = AppError::new(ErrorKind::Conflict, "version mismatch");
    assert_eq!(error.kind(), ErrorKind::Conflict);
    assert_eq!(error.message(), "version mismatch");
    assert!(error.cause().is_none());
    assert!(error.context().is_empty());
}

#[rstest]
#[case(AppError::not_found("m"), ErrorKind::NotFound)]
#[case(AppError::validation("m"), ErrorKind::Validation)]
#[case(AppError::unauthorized("m"), ErrorKind::Unauthorized)]
#[case(AppError::forbidden("m"), ErrorKind::Forbidden)]
#[case(AppError::conflict("m"), ErrorKind::Conflict)]
#[case(AppError::external("m"), ErrorKind::ExternalService)]
#[case(AppError::internal("m"), ErrorKind::Internal)]
fn convenience_constructors_pick_the_kind(#[case] error: AppError, #[case] kind: ErrorKind) {
    assert_eq!(error.kind(), kind);
}

#[rstest]
fn with_context_accumulates_entries() {
    let error = AppError::validation("bad input")
        .with_context("field", "email")
        .with_context("attempt", 3);
    assert_eq!(error.context().get("field"), Some(&json!("email")));
    assert_eq!(error.context().get("attempt"), Some(&json!(3)));
}

// =============================================================================
// Cause Chains
// =============================================================================

#[rstest]
fn wrap_preserves_the_chain() {
    let root = AppError::internal("connection reset");
    let wrapped = AppError::wrap(ErrorKind::ExternalService, "billing call failed", root);

    assert_eq!(wrapped.kind(), ErrorKind::ExternalService);
    let cause = wrapped.cause().expect("cause is set");
    assert_eq!(cause.message(), "connection reset");
}

#[rstest]
fn cause_chain_is_immediate_cause_first() {
    let chained = AppError::wrap(
        ErrorKind::Internal,
        "m2",
        AppError::wrap(ErrorKind::Validation, "m1", AppError::internal("root")),
    );
    assert_eq!(chained.cause_chain(), vec!["m1", "root"]);
}

#[rstest]
fn unwrapped_error_has_an_empty_chain() {
    assert!(AppError::internal("alone").cause_chain().is_empty());
}

#[rstest]
fn external_cause_converts_foreign_errors_at_capture() {
    let io_error = std::io::Error::other("disk on fire");
    let error = AppError::external_cause(
        ErrorKind::ExternalService,
        "snapshot upload failed",
        &io_error,
    );
    assert_eq!(error.kind(), ErrorKind::ExternalService);
    assert_eq!(error.cause_chain(), vec!["disk on fire"]);
}

// =============================================================================
// Serialization Contract
// =============================================================================

#[rstest]
fn to_json_is_the_flat_record() {
    let error = AppError::validation("bad input").with_context("field", "email");
    assert_eq!(
        error.to_json(),
        json!({
            "code": "VALIDATION",
            "message": "bad input",
            "context": {"field": "email"},
            "causeChain": [],
        }),
    );
}

#[rstest]
fn to_json_flattens_the_cause_chain_to_messages() {
    let chained = AppError::wrap(
        ErrorKind::ExternalService,
        "m2",
        AppError::wrap(ErrorKind::Internal, "m1", AppError::internal("root")),
    );
    assert_eq!(
        chained.to_json(),
        json!({
            "code": "EXTERNAL_SERVICE_ERROR",
            "message": "m2",
            "context": {},
            "causeChain": ["m1", "root"],
        }),
    );
}

#[rstest]
fn serialize_matches_to_json() {
    let error = AppError::not_found("user 42 missing").with_context("id", 42);
    let direct = serde_json::to_value(&error).expect("serializable");
    assert_eq!(direct, error.to_json());
}

// =============================================================================
// Boundary Mapping Tables
// =============================================================================

#[rstest]
#[case(ErrorKind::NotFound, 404)]
#[case(ErrorKind::Validation, 400)]
#[case(ErrorKind::Conflict, 400)]
#[case(ErrorKind::Unauthorized, 401)]
#[case(ErrorKind::Forbidden, 403)]
#[case(ErrorKind::ExternalService, 500)]
#[case(ErrorKind::Internal, 500)]
fn http_status_follows_the_kind_table(#[case] kind: ErrorKind, #[case] status: u16) {
    assert_eq!(AppError::new(kind, "m").http_status(), status);
}

#[rstest]
#[case(ErrorKind::NotFound)]
#[case(ErrorKind::Validation)]
#[case(ErrorKind::Unauthorized)]
#[case(ErrorKind::Forbidden)]
#[case(ErrorKind::Conflict)]
#[case(ErrorKind::ExternalService)]
#[case(ErrorKind::Internal)]
fn every_kind_is_fatal_to_the_operation_only(#[case] kind: ErrorKind) {
    assert_eq!(AppError::new(kind, "m").exit_code(), 1);
}

// =============================================================================
// Display and std::error::Error
// =============================================================================

#[rstest]
fn display_includes_kind_and_message() {
    let error = AppError::not_found("user 42 missing");
    assert_eq!(format!("{error}"), "NOT_FOUND: user 42 missing");
}

#[rstest]
fn source_walks_the_chain() {
    use std::error::Error;

    let chained = AppError::wrap(
        ErrorKind::ExternalService,
        "m2",
        AppError::wrap(ErrorKind::Internal, "m1", AppError::internal("root")),
    );

    let first = chained.source().expect("first link");
    assert_eq!(format!("{first}"), "INTERNAL: m1");
    let second = first.source().expect("second link");
    assert_eq!(format!("{second}"), "INTERNAL: root");
    assert!(second.source().is_none());
}

// =============================================================================
// Kind Wire Forms
// =============================================================================

#[rstest]
fn kind_wire_forms_roundtrip() {
    for kind in [
        ErrorKind::NotFound,
        ErrorKind::Validation,
        ErrorKind::Unauthorized,
        ErrorKind::Forbidden,
        ErrorKind::Conflict,
        ErrorKind::ExternalService,
        ErrorKind::Internal,
    ] {
        assert_eq!(kind.as_str().parse::<ErrorKind>(), Ok(kind));
    }
}

// =============================================================================
// From Implementations
// =============================================================================

#[rstest]
fn serde_parse_failures_are_validation_errors() {
    let parse_error = serde_json::from_str::<i32>("not json").expect_err("invalid");
    let error: AppError = parse_error.into();
    assert_eq!(error.kind(), ErrorKind::Validation);
}

#[rstest]
fn io_failures_are_internal_errors() {
    let io_error = std::io::Error::other("disk on fire");
    let error: AppError = io_error.into();
    assert_eq!(error.kind(), ErrorKind::Internal);
    assert_eq!(error.message(), "disk on fire");
}

// =============================================================================
// Equality and Cloning
// =============================================================================

#[rstest]
fn clone_preserves_the_whole_structure() {
    let error = AppError::wrap(
        ErrorKind::ExternalService,
        "m2",
        AppError::internal("root"),
    )
    .with_context("attempt", 3);
    assert_eq!(error.clone(), error);
}
