//! Gamers repository functions for domain layer.

use sea_orm::ConnectionTrait;
use uuid::Uuid;

use crate::adapters::gamers_sea as gamers_adapter;
use crate::entities::gamers;
use crate::errors::domain::{DomainError, InfraErrorKind};

/// Gamer domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Gamer {
    pub id: i64,
    pub gamer_guid: Uuid,
    pub nickname: String,
    pub created_at: time::OffsetDateTime,
}

/// Find a gamer by nickname, ignoring case
pub async fn find_by_nickname<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    nickname: &str,
) -> Result<Option<Gamer>, DomainError> {
    let gamer = gamers_adapter::find_by_nickname(conn, nickname).await?;
    gamer.map(Gamer::try_from).transpose()
}

/// Create a gamer with a freshly generated guid
pub async fn create_gamer<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    nickname: &str,
) -> Result<Gamer, DomainError> {
    create_gamer_with_guid(conn, Uuid::new_v4(), nickname).await
}

pub async fn create_gamer_with_guid<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    gamer_guid: Uuid,
    nickname: &str,
) -> Result<Gamer, DomainError> {
    let dto = gamers_adapter::GamerCreate {
        gamer_guid: gamer_guid.hyphenated().to_string(),
        nickname: nickname.to_string(),
    };
    let gamer = gamers_adapter::create_gamer(conn, dto).await?;
    Gamer::try_from(gamer)
}

pub async fn count<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<u64, DomainError> {
    Ok(gamers_adapter::count(conn).await?)
}

pub(crate) fn parse_guid(raw: &str, gamer_id: i64) -> Result<Uuid, DomainError> {
    Uuid::parse_str(raw).map_err(|_| {
        DomainError::infra(
            InfraErrorKind::DataCorruption,
            format!("Gamer {gamer_id} has a malformed guid"),
        )
    })
}

impl TryFrom<gamers::Model> for Gamer {
    type Error = DomainError;

    fn try_from(model: gamers::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            gamer_guid: parse_guid(&model.gamer_guid, model.id)?,
            id: model.id,
            nickname: model.nickname,
            created_at: model.created_at,
        })
    }
}
