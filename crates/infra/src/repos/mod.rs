pub mod matrix_entries;
pub mod players;
pub mod practice_exercises;
pub mod practice_sessions;
pub mod seasons;
pub mod tournaments;
pub mod users;

pub use matrix_entries::NewMatrixEntry;
pub use players::{CreatePlayer, UpdatePlayer};
pub use practice_exercises::{CreatePracticeExercise, UpdatePracticeExercise};
pub use practice_sessions::{CreatePracticeSession, UpdatePracticeSession};
pub use seasons::CreateSeason;
pub use tournaments::{CreateTournament, UpdateTournament};
pub use users::CreateUser;
