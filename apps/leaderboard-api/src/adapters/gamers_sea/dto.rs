//! DTOs for gamers_sea adapter.

/// DTO for creating a gamer.
#[derive(Debug, Clone)]
pub struct GamerCreate {
    pub gamer_guid: String,
    pub nickname: String,
}
