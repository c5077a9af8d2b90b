//! In-process games between two computer players.

use crate::config::EngineConfig;
use crate::engine::{GameSummary, TurnEngine};
use crate::error::GameError;
use crate::player::AiPlayer;
use crate::protocol::ShipSizes;
use crate::transport::in_memory;

/// Play one AI vs AI game over an in-memory connection.
///
/// Returns the active side's summary first, then the passive side's.
pub async fn play_local(
    active_seed: u64,
    passive_seed: u64,
    ship_sizes: &ShipSizes,
    config: EngineConfig,
) -> Result<(GameSummary, GameSummary), GameError> {
    let (active_end, passive_end) = in_memory::pair();
    let mut active = TurnEngine::with_config(AiPlayer::seeded(active_seed), config);
    let mut passive = TurnEngine::with_config(AiPlayer::seeded(passive_seed), config);

    tokio::try_join!(
        active.run_active(active_end, ship_sizes),
        passive.run_passive(passive_end),
    )
}
