/*! Integration tests for Strata.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - compare: Tests for `Same` and the shallow equality helpers
 * - update: Tests for `update_object`, patches and deep patches
 * - ops: Tests for the container operators and their composition
 * - selector: Tests for static and tracked memoized selectors
 * - store: Tests for the Store and its configuration
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("strata=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod helpers;
mod selector;
mod store;
mod update;
