//! Re-export hub so callers can say `crate::gql::types::Tournament` without
//! caring which domain owns the type.

pub use super::common::types::{PaginatedResponse, PaginationInput};
pub use super::domains::auth::types::User;
pub use super::domains::dashboard::types::{
    AttendanceRow, MonthlyAttendance, PlayerMinutesSummary, PlayerTotalsSummary,
};
pub use super::domains::players::types::{CreatePlayerInput, Player, UpdatePlayerInput};
pub use super::domains::practises::types::{
    CreatePracticeExerciseInput, CreatePracticeSessionInput, PracticeExercise, PracticeSession,
    UpdatePracticeExerciseInput, UpdatePracticeSessionInput,
};
pub use super::domains::seasons::types::{CreateSeasonInput, Season};
pub use super::domains::tournaments::types::{
    CreateTournamentInput, MatrixEntry, PlayerSheetMinutes, ReconcileParticipationInput,
    RemoveTournamentOpponentInput, RemoveTournamentPlayerInput, SlotFlagInput, Tournament,
    UpdateCoachNotesInput, UpdateTournamentInput,
};
