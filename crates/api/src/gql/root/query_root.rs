use async_graphql::MergedObject;

use crate::gql::domains::brackets::BracketQuery;
use crate::gql::domains::clubs::ClubQuery;
use crate::gql::domains::players::PlayerQuery;
use crate::gql::domains::registrations::RegistrationQuery;
use crate::gql::domains::rewards::RewardQuery;
use crate::gql::domains::tournaments::TournamentQuery;

#[derive(MergedObject, Default)]
pub struct QueryRoot(
    ClubQuery,
    PlayerQuery,
    TournamentQuery,
    RegistrationQuery,
    BracketQuery,
    RewardQuery,
);
