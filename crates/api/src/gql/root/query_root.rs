use async_graphql::MergedObject;

use crate::gql::domains::auth::AuthQuery;
use crate::gql::domains::dashboard::DashboardQuery;
use crate::gql::domains::players::PlayerQuery;
use crate::gql::domains::practises::PractiseQuery;
use crate::gql::domains::seasons::SeasonQuery;
use crate::gql::domains::tournaments::TournamentQuery;

#[derive(MergedObject, Default)]
pub struct QueryRoot(
    AuthQuery,
    DashboardQuery,
    PlayerQuery,
    PractiseQuery,
    SeasonQuery,
    TournamentQuery,
);
