mod common;
use std::sync::Arc;

use prova::{Prova, Roster, SelectorId};
use prova_middleware::CachingStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    // Wrap the store so the roster-wide fan-out fetches each (selector,
    // window) slice once instead of once per player.
    let cached = Arc::new(CachingStore::new(common::get_store()));

    let prova = Prova::builder()
        .store(cached.clone())
        .tracker_name("Band Practice")
        .roster(Roster::new(["Anna", "Bruno", "Carla", "Dario"])?)
        .build()?;

    let report = prova.report().at(common::fixture_now()).run().await?;
    for total in &report.totals {
        println!("total {:<10} {}", total.period.label(), total.reading);
    }

    // After the host appends to the selector log, invalidate that selector
    // so the next poll re-reads the store.
    cached.invalidate(&SelectorId::for_tracker("Band Practice"));

    Ok(())
}
