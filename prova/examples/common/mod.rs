use prova::PracticeStore;
use std::sync::Arc;

#[must_use]
pub fn get_store() -> Arc<dyn PracticeStore> {
    Arc::new(prova_mock::MockStore::new())
}

/// Instant inside the fixture history, so examples print stable numbers.
#[must_use]
pub fn fixture_now() -> chrono::DateTime<chrono::Utc> {
    "2024-03-02T12:00:00Z".parse().expect("valid RFC 3339 instant")
}
