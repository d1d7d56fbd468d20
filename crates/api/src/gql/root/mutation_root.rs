use async_graphql::MergedObject;

use crate::gql::domains::brackets::BracketMutation;
use crate::gql::domains::clubs::ClubMutation;
use crate::gql::domains::players::PlayerMutation;
use crate::gql::domains::registrations::RegistrationMutation;
use crate::gql::domains::rewards::RewardMutation;
use crate::gql::domains::tables::TableMutation;
use crate::gql::domains::tournaments::TournamentMutation;

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    ClubMutation,
    PlayerMutation,
    TournamentMutation,
    RegistrationMutation,
    BracketMutation,
    RewardMutation,
    TableMutation,
);
