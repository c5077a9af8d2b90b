//! Handshake and attack-alternation state machine.
//!
//! The active side sends the game configuration and attacks first; the
//! passive side receives the configuration and defends first. A HIT or
//! DISABLED_SHIP keeps the attacker in place, a MISSED hands the turn over,
//! and GAME_END closes the connection.

use serde::{Deserialize, Serialize};
use tokio::io::{AsyncRead, AsyncWrite};

use crate::config::EngineConfig;
use crate::error::GameError;
use crate::player::Player;
use crate::protocol::{AttackResponse, ShipSizes};
use crate::transport::Connection;

/// Which half of the bootstrap this side plays. Fixed for the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Dials, sends the configuration, attacks first.
    Active,
    /// Accepts, receives the configuration, defends first.
    Passive,
}

impl Role {
    pub fn first_turn(self) -> Turn {
        match self {
            Role::Active => Turn::Local,
            Role::Passive => Turn::Peer,
        }
    }
}

/// Who currently holds the right to attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    Local,
    Peer,
}

impl Turn {
    pub fn flip(self) -> Self {
        match self {
            Turn::Local => Turn::Peer,
            Turn::Peer => Turn::Local,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The peer answered one of our attacks with GAME_END.
    Victory,
    /// Our player answered an attack with GAME_END.
    Defeat,
    /// The peer went away mid-game; treated as an implicit GAME_END.
    PeerDisconnected,
}

/// How a finished game went, from this side's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub role: Role,
    pub outcome: Outcome,
    pub attacks_sent: u64,
    pub attacks_received: u64,
}

impl GameSummary {
    fn new(role: Role) -> Self {
        Self {
            role,
            outcome: Outcome::PeerDisconnected,
            attacks_sent: 0,
            attacks_received: 0,
        }
    }

    fn record_sent(&mut self) {
        self.attacks_sent = self.attacks_sent.saturating_add(1);
    }

    fn record_received(&mut self) {
        self.attacks_received = self.attacks_received.saturating_add(1);
    }
}

pub struct TurnEngine<P> {
    player: P,
    config: EngineConfig,
}

impl<P: Player> TurnEngine<P> {
    pub fn new(player: P) -> Self {
        Self::with_config(player, EngineConfig::default())
    }

    pub fn with_config(player: P, config: EngineConfig) -> Self {
        Self { player, config }
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    pub fn into_player(self) -> P {
        self.player
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Send the configuration, handshake, then attack first.
    pub async fn run_active<S>(&mut self, stream: S, ship_sizes: &ShipSizes) -> Result<GameSummary, GameError>
    where
        S: AsyncRead + AsyncWrite + Unpin,
    {
        let mut conn = Connection::with_read_timeout(stream, self.config.read_timeout);
        let result = self.bootstrap_active(&mut conn, ship_sizes).await;
        self.finish_bootstrap(conn, Role::Active, result).await
    }

    /// Receive the configuration, handshake, then defend first.
    pub async fn run_passive<S>(&mut self, stream: S) -> Result<GameSummary, GameError>
    where
        S: AsyncRead + AsyncWrite + Unpin,
    {
        let mut conn = Connection::with_read_timeout(stream, self.config.read_timeout);
        let result = self.bootstrap_passive(&mut conn).await;
        self.finish_bootstrap(conn, Role::Passive, result).await
    }

    async fn bootstrap_active<S>(&mut self, conn: &mut Connection<S>, ship_sizes: &ShipSizes) -> Result<(), GameError>
    where
        S: AsyncRead + AsyncWrite + Unpin,
    {
        conn.send_config(ship_sizes).await?;
        conn.send_handshake(self.config.handshake_token).await?;
        self.player.initialize_board(ship_sizes);
        self.await_handshake(conn).await
    }

    async fn bootstrap_passive<S>(&mut self, conn: &mut Connection<S>) -> Result<(), GameError>
    where
        S: AsyncRead + AsyncWrite + Unpin,
    {
        let ship_sizes = conn.recv_config().await?;
        tracing::debug!(ships = %ship_sizes, "received game configuration");
        self.player.initialize_board(&ship_sizes);
        conn.send_handshake(self.config.handshake_token).await?;
        self.await_handshake(conn).await
    }

    async fn await_handshake<S>(&mut self, conn: &mut Connection<S>) -> Result<(), GameError>
    where
        S: AsyncRead + AsyncWrite + Unpin,
    {
        let expected = self.config.handshake_token;
        let received = conn.recv_handshake().await?;
        if received != expected {
            return Err(GameError::Handshake { expected, received });
        }
        Ok(())
    }

    async fn finish_bootstrap<S>(
        &mut self,
        mut conn: Connection<S>,
        role: Role,
        result: Result<(), GameError>,
    ) -> Result<GameSummary, GameError>
    where
        S: AsyncRead + AsyncWrite + Unpin,
    {
        if let Err(e) = result {
            tracing::warn!(?role, error = %e, "bootstrap failed, closing connection");
            conn.close().await;
            return Err(e);
        }
        tracing::info!(?role, "handshake complete");
        self.attack_loop(&mut conn, role).await
    }

    async fn attack_loop<S>(&mut self, conn: &mut Connection<S>, role: Role) -> Result<GameSummary, GameError>
    where
        S: AsyncRead + AsyncWrite + Unpin,
    {
        let mut summary = GameSummary::new(role);
        let mut turn = role.first_turn();

        while conn.is_open() {
            let response = match self.exchange(conn, turn, &mut summary).await {
                Ok(response) => response,
                Err(GameError::ConnectionClosed) => {
                    tracing::info!(?turn, "peer closed the connection, ending game");
                    conn.close().await;
                    break;
                }
                Err(e) => {
                    tracing::warn!(?turn, error = %e, "fatal protocol error, closing connection");
                    conn.close().await;
                    return Err(e);
                }
            };

            match response {
                AttackResponse::GameEnd => {
                    summary.outcome = match turn {
                        Turn::Local => Outcome::Victory,
                        Turn::Peer => Outcome::Defeat,
                    };
                    conn.close().await;
                }
                AttackResponse::Hit | AttackResponse::DisabledShip => {}
                AttackResponse::Missed => turn = turn.flip(),
            }
        }

        tracing::info!(
            outcome = ?summary.outcome,
            sent = summary.attacks_sent,
            received = summary.attacks_received,
            "game over"
        );
        Ok(summary)
    }

    /// One attack by whoever holds the turn.
    async fn exchange<S>(
        &mut self,
        conn: &mut Connection<S>,
        turn: Turn,
        summary: &mut GameSummary,
    ) -> Result<AttackResponse, GameError>
    where
        S: AsyncRead + AsyncWrite + Unpin,
    {
        match turn {
            Turn::Local => {
                let target = self.player.attack();
                conn.send_attack(target).await?;
                summary.record_sent();
                let response = conn.recv_response().await?;
                tracing::debug!(%target, ?response, "attack resolved");
                self.player.process_attack_result(target, response);
                Ok(response)
            }
            Turn::Peer => {
                let target = conn.recv_attack().await?;
                summary.record_received();
                let response = self.player.respond_to_attack(target);
                tracing::debug!(%target, ?response, "defended");
                conn.send_response(response).await?;
                Ok(response)
            }
        }
    }
}
