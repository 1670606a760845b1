//! Unit tests for the RemoteData<T, E> lifecycle type.
//!
//! RemoteData models a fetched value as four mutually exclusive states:
//! NotAsked -> Loading -> Success | Failure, with Loading reachable again
//! from Success (refetch) and Failure (retry). Concluding transitions
//! live only on the InFlight handle returned by `to_loading`.

use outcomes::{InFlight, Outcome, RemoteData};
use rstest::rstest;

// =============================================================================
// Initial State
// =============================================================================

#[rstest]
fn not_asked_is_the_initial_state() {
    let initial = RemoteData::<i32, String>::not_asked();
    let label = initial.fold(|| "not asked", || "loading", |_| "success", |_| "failure");
    assert_eq!(label, "not asked");
}

// =============================================================================
// Lifecycle Transitions
// =============================================================================

#[rstest]
fn success_is_reached_through_loading() {
    let fetched = RemoteData::<i32, String>::not_asked()
        .to_loading()
        .to_success(10);
    let value = fetched.fold(|| 0, || 0, |value| value, |_| 0);
    assert_eq!(value, 10);
}

#[rstest]
fn failure_is_reached_through_loading() {
    let failed = RemoteData::<i32, String>::not_asked()
        .to_loading()
        .to_failure("timeout".to_string());
    let error = failed.fold(
        || String::new(),
        || String::new(),
        |_| String::new(),
        |error| error,
    );
    assert_eq!(error, "timeout");
}

#[rstest]
fn refetch_from_success_passes_through_loading() {
    let refetched = RemoteData::<i32, String>::not_asked()
        .to_loading()
        .to_success(10)
        .to_loading()
        .into_remote();
    let loading = refetched.fold(|| false, || true, |_| false, |_| false);
    assert!(loading);
}

#[rstest]
fn retry_from_failure_can_conclude_differently() {
    let retried = RemoteData::<i32, String>::not_asked()
        .to_loading()
        .to_failure("timeout".to_string())
        .to_loading()
        .to_success(3);
    let value = retried.fold(|| 0, || 0, |value| value, |_| 0);
    assert_eq!(value, 3);
}

#[rstest]
fn in_flight_handle_survives_rendering_the_loading_state() {
    let in_flight: InFlight<i32, String> = RemoteData::not_asked().to_loading();

    // Copy: rendering the Loading state does not forfeit the conclusion.
    let rendering = in_flight.into_remote();
    assert!(rendering.fold(|| false, || true, |_| false, |_| false));

    let concluded = in_flight.to_success(7);
    assert_eq!(concluded.fold(|| 0, || 0, |value| value, |_| 0), 7);
}

#[rstest]
fn in_flight_converts_into_loading_remote_data() {
    let rendering: RemoteData<i32, String> = RemoteData::not_asked().to_loading().into();
    assert!(rendering.fold(|| false, || true, |_| false, |_| false));
}

// =============================================================================
// Lifting Concluded Computations
// =============================================================================

#[rstest]
fn from_outcome_maps_success_to_success() {
    let fetched = RemoteData::from_outcome(Outcome::<i32, String>::success(7));
    assert_eq!(fetched.fold(|| 0, || 0, |value| value, |_| 0), 7);
}

#[rstest]
fn from_outcome_maps_failure_to_failure() {
    let failed = RemoteData::from_outcome(Outcome::<i32, String>::failure("gone".to_string()));
    let error = failed.fold(
        || String::new(),
        || String::new(),
        |_| String::new(),
        |error| error,
    );
    assert_eq!(error, "gone");
}

#[rstest]
fn from_outcome_never_produces_not_asked_or_loading() {
    let concluded = [
        RemoteData::from_outcome(Outcome::<i32, String>::success(1)),
        RemoteData::from_outcome(Outcome::<i32, String>::failure("gone".to_string())),
    ];
    for remote in concluded {
        let concluded = remote.fold(|| false, || false, |_| true, |_| true);
        assert!(concluded);
    }
}

// =============================================================================
// Mapping Operations
// =============================================================================

#[rstest]
fn map_transforms_only_the_success_payload() {
    let doubled = RemoteData::<i32, String>::not_asked()
        .to_loading()
        .to_success(21)
        .map(|value| value * 2);
    assert_eq!(doubled.fold(|| 0, || 0, |value| value, |_| 0), 42);
}

#[rstest]
fn map_preserves_the_other_states() {
    let not_asked = RemoteData::<i32, String>::not_asked().map(|value| value * 2);
    assert_eq!(not_asked, RemoteData::not_asked());

    let failed = RemoteData::<i32, String>::not_asked()
        .to_loading()
        .to_failure("gone".to_string())
        .map(|value| value * 2);
    let error = failed.fold(
        || String::new(),
        || String::new(),
        |_| String::new(),
        |error| error,
    );
    assert_eq!(error, "gone");
}

#[rstest]
fn map_failure_transforms_only_the_failure_payload() {
    let failed = RemoteData::<i32, String>::not_asked()
        .to_loading()
        .to_failure("gone".to_string())
        .map_failure(|error| error.len());
    assert_eq!(failed.fold(|| 0, || 0, |_| 0, |length| length), 4);
}

// =============================================================================
// Exhaustive Case Analysis
// =============================================================================

#[rstest]
fn fold_reaches_every_state() {
    let render = |remote: RemoteData<i32, String>| {
        remote.fold(
            || "idle".to_string(),
            || "spinner".to_string(),
            |value| format!("value {value}"),
            |error| format!("error {error}"),
        )
    };

    assert_eq!(render(RemoteData::not_asked()), "idle");
    assert_eq!(
        render(RemoteData::not_asked().to_loading().into_remote()),
        "spinner"
    );
    assert_eq!(
        render(RemoteData::not_asked().to_loading().to_success(9)),
        "value 9"
    );
    assert_eq!(
        render(
            RemoteData::not_asked()
                .to_loading()
                .to_failure("gone".to_string())
        ),
        "error gone"
    );
}

// =============================================================================
// Debug
// =============================================================================

#[rstest]
fn debug_is_state_shaped() {
    assert_eq!(
        format!("{:?}", RemoteData::<i32, String>::not_asked()),
        "NotAsked"
    );
    assert_eq!(
        format!(
            "{:?}",
            RemoteData::<i32, String>::not_asked()
                .to_loading()
                .into_remote()
        ),
        "Loading"
    );
    assert_eq!(
        format!(
            "{:?}",
            RemoteData::<i32, String>::not_asked()
                .to_loading()
                .to_success(1)
        ),
        "Success(1)"
    );
}
