use tracing_subscriber::EnvFilter;

/// Install a test-writer subscriber filtered by the `TEST_LOG` environment variable. Safe to call from every test.
pub fn init_tracing() {
  let _ = tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_env("TEST_LOG").unwrap_or_default())
    .with_test_writer()
    .try_init();
}
