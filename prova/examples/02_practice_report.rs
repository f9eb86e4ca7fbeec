mod common;
use prova::{Prova, Roster};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let prova = Prova::builder()
        .store(common::get_store())
        .tracker_name("Band Practice")
        .roster(Roster::new(["Anna", "Bruno", "Carla", "Dario"])?)
        .build()?;

    // One call fans out roster × periods concurrently and sums per-period
    // totals; per-pair failures would degrade to unavailable readings in
    // `report.warnings` instead of aborting.
    let report = prova.report().at(common::fixture_now()).run().await?;

    for entry in &report.players {
        println!(
            "{:<8} {:<10} {}",
            entry.player,
            entry.period.label(),
            entry.reading
        );
    }
    println!("---");
    for total in &report.totals {
        println!(
            "total    {:<10} {} ({} players)",
            total.period.label(),
            total.reading,
            total.player_count
        );
    }
    if !report.warnings.is_empty() {
        println!("warnings: {:?}", report.warnings);
    }

    Ok(())
}
