use async_graphql::{Result, Subscription};
use futures_util::Stream;
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::broadcast;
use tokio_stream::wrappers::{errors::BroadcastStreamRecvError, BroadcastStream};
use uuid::Uuid;

use crate::gql::domains::brackets::types::BracketChangeEvent;
use crate::gql::domains::rewards::types::RewardChangeEvent;
use crate::gql::domains::tables::types::TableStatusEvent;
use crate::gql::error::ResultExt;

/// Per-tournament channels for real-time updates
struct TournamentChannels {
    bracket: broadcast::Sender<BracketChangeEvent>,
    rewards: broadcast::Sender<RewardChangeEvent>,
}

impl TournamentChannels {
    fn new() -> Self {
        Self {
            bracket: broadcast::channel(100).0,
            rewards: broadcast::channel(100).0,
        }
    }
}

/// All subscription channels
struct SubscriptionChannels {
    /// Per-tournament channels (bracket, rewards)
    tournaments: HashMap<Uuid, TournamentChannels>,
    /// Per-club table-status channels (for the floor view)
    clubs: HashMap<Uuid, broadcast::Sender<TableStatusEvent>>,
}

impl SubscriptionChannels {
    fn new() -> Self {
        Self {
            tournaments: HashMap::new(),
            clubs: HashMap::new(),
        }
    }

    fn get_or_create_tournament(&mut self, tournament_id: Uuid) -> &TournamentChannels {
        self.tournaments
            .entry(tournament_id)
            .or_insert_with(TournamentChannels::new)
    }

    fn get_or_create_club(&mut self, club_id: Uuid) -> &broadcast::Sender<TableStatusEvent> {
        self.clubs
            .entry(club_id)
            .or_insert_with(|| broadcast::channel(100).0)
    }
}

static CHANNELS: Lazy<Arc<Mutex<SubscriptionChannels>>> =
    Lazy::new(|| Arc::new(Mutex::new(SubscriptionChannels::new())));

pub struct SubscriptionRoot;

#[Subscription]
impl SubscriptionRoot {
    /// Subscribe to bracket/match changes for a specific tournament
    async fn tournament_bracket_changes(
        &self,
        tournament_id: async_graphql::ID,
    ) -> Result<impl Stream<Item = Result<BracketChangeEvent, BroadcastStreamRecvError>>> {
        let tournament_uuid =
            Uuid::parse_str(tournament_id.as_str()).gql_err("Invalid tournament ID")?;

        let receiver = {
            let mut channels = CHANNELS.lock();
            let tournament = channels.get_or_create_tournament(tournament_uuid);
            tournament.bracket.subscribe()
        };

        Ok(BroadcastStream::new(receiver))
    }

    /// Subscribe to reward-table changes for a specific tournament
    async fn tournament_reward_changes(
        &self,
        tournament_id: async_graphql::ID,
    ) -> Result<impl Stream<Item = Result<RewardChangeEvent, BroadcastStreamRecvError>>> {
        let tournament_uuid =
            Uuid::parse_str(tournament_id.as_str()).gql_err("Invalid tournament ID")?;

        let receiver = {
            let mut channels = CHANNELS.lock();
            let tournament = channels.get_or_create_tournament(tournament_uuid);
            tournament.rewards.subscribe()
        };

        Ok(BroadcastStream::new(receiver))
    }

    /// Subscribe to table free/in-use changes for a club
    async fn club_table_changes(
        &self,
        club_id: async_graphql::ID,
    ) -> Result<impl Stream<Item = Result<TableStatusEvent, BroadcastStreamRecvError>>> {
        let club_uuid = Uuid::parse_str(club_id.as_str()).gql_err("Invalid club ID")?;

        let receiver = {
            let mut channels = CHANNELS.lock();
            let club_sender = channels.get_or_create_club(club_uuid);
            club_sender.subscribe()
        };

        Ok(BroadcastStream::new(receiver))
    }
}

// --- Publish helpers used by mutations ---

pub fn publish_bracket_event(tournament_id: Uuid, event: BracketChangeEvent) {
    let mut channels = CHANNELS.lock();
    let tournament = channels.get_or_create_tournament(tournament_id);
    // Send fails only when nobody is subscribed
    let _ = tournament.bracket.send(event);
}

pub fn publish_reward_event(tournament_id: Uuid, event: RewardChangeEvent) {
    let mut channels = CHANNELS.lock();
    let tournament = channels.get_or_create_tournament(tournament_id);
    let _ = tournament.rewards.send(event);
}

pub fn publish_table_event(club_id: Uuid, event: TableStatusEvent) {
    let mut channels = CHANNELS.lock();
    let club_sender = channels.get_or_create_club(club_id);
    let _ = club_sender.send(event);
}
