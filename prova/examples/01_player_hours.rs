mod common;
use prova::{Period, Prova, Roster};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Create the store (deterministic mock fixtures).
    let store = common::get_store();

    // 2. Build the orchestrator and register the store.
    let prova = Prova::builder()
        .store(store)
        .tracker_name("Band Practice")
        .roster(Roster::new(["Anna", "Bruno", "Carla", "Dario"])?)
        .build()?;

    // 3. Who is on the selector right now?
    println!("current player: {:?}", prova.current_player().await?);

    // 4. Per-player hours over the last 7 days, evaluated at a fixed instant
    //    inside the fixture history.
    let now = common::fixture_now();
    for player in ["Anna", "Bruno", "Carla", "Dario"] {
        let hours = prova.player_hours_at(player, Period::SevenDays, now).await?;
        println!("{player}: {hours} h over the last 7 days");
    }

    Ok(())
}
