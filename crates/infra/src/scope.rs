use uuid::Uuid;

/// The (coach, season) pair that restricts which rows an operation may read
/// or mutate. Threaded explicitly through every repo call — never ambient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scope {
    pub user_id: Uuid,
    pub season_id: Uuid,
}

impl Scope {
    pub fn new(user_id: Uuid, season_id: Uuid) -> Self {
        Self { user_id, season_id }
    }
}
