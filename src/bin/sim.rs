use broadside::{play_local, EngineConfig, Outcome, ShipSizes};
use serde_json::json;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 && args.len() != 4 {
        let program = args.first().map(String::as_str).unwrap_or("sim");
        eprintln!("Usage: {} <seed1> <seed2> [ship sizes, e.g. 5,4,3,3,2]", program);
        std::process::exit(1);
    }
    let seed1: u64 = args[1].parse()?;
    let seed2: u64 = args[2].parse()?;
    let ships: ShipSizes = match args.get(3) {
        Some(list) => list.parse()?,
        None => ShipSizes::default(),
    };

    let (active, passive) = play_local(seed1, seed2, &ships, EngineConfig::default()).await?;

    let winner = match (active.outcome, passive.outcome) {
        (Outcome::Victory, _) => Some("active"),
        (_, Outcome::Victory) => Some("passive"),
        _ => None,
    };

    let result = json!({
        "ships": ships,
        "active": active,
        "passive": passive,
        "winner": winner,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
