use async_graphql::MergedObject;

use crate::gql::domains::players::PlayerMutation;
use crate::gql::domains::practises::PractiseMutation;
use crate::gql::domains::seasons::SeasonMutation;
use crate::gql::domains::tournaments::TournamentMutation;

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    PlayerMutation,
    PractiseMutation,
    SeasonMutation,
    TournamentMutation,
);
