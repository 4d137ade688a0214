//! Skip policy for suites that need an embedded PostgreSQL cluster.
//!
//! The cluster downloads PostgreSQL binaries on first use, which is not
//! possible everywhere. Setup failures therefore skip the suite unless
//! `REQUIRE_TEST_CLUSTER` is truthy; `SKIP_TEST_CLUSTER` always skips.

fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Returns true when cluster setup failures must fail the test run.
pub fn cluster_is_required() -> bool {
    env_flag("REQUIRE_TEST_CLUSTER") && !env_flag("SKIP_TEST_CLUSTER")
}

/// Handles embedded cluster setup failures consistently across suites.
///
/// Prints a skip marker and returns `None`, or panics when
/// [`cluster_is_required`] holds so CI breakage is not masked.
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if cluster_is_required() {
        panic!("Test cluster setup failed: {reason}. Unset REQUIRE_TEST_CLUSTER to skip.");
    }
    eprintln!("SKIP-TEST-CLUSTER: {reason}");
    None
}
