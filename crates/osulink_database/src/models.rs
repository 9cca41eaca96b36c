//! Row types for the `linked_accounts` table.

use crate::schema::linked_accounts;
use chrono::NaiveDateTime;
use diesel::prelude::*;
use osulink_core::{GameMode, LinkRecord};
use osulink_error::{DatabaseError, DatabaseErrorKind};

/// Database row for linked_accounts table.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable)]
#[diesel(table_name = linked_accounts)]
#[diesel(primary_key(discord_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct LinkedAccountRow {
    pub discord_id: String,
    pub osu_id: i64,
    pub osu_username: String,
    pub mode: String,
    pub created_at: NaiveDateTime,
}

/// Insertable struct for linked_accounts table.
///
/// Always carries `created_at` so a replace resets the link timestamp.
#[derive(Debug, Clone, Insertable, derive_builder::Builder)]
#[diesel(table_name = linked_accounts)]
#[builder(setter(into))]
pub struct NewLinkedAccount {
    discord_id: String,
    osu_id: i64,
    osu_username: String,
    mode: String,
    created_at: NaiveDateTime,
}

impl TryFrom<LinkedAccountRow> for LinkRecord {
    type Error = DatabaseError;

    fn try_from(row: LinkedAccountRow) -> Result<Self, Self::Error> {
        let osu_user_id = u32::try_from(row.osu_id).map_err(|_| {
            DatabaseError::new(DatabaseErrorKind::Serialization(format!(
                "osu_id {} out of range for discord_id {}",
                row.osu_id, row.discord_id
            )))
        })?;
        let mode = row.mode.parse::<GameMode>().map_err(|e| {
            DatabaseError::new(DatabaseErrorKind::Serialization(format!(
                "{} for discord_id {}",
                e, row.discord_id
            )))
        })?;

        Ok(LinkRecord::new(
            row.discord_id,
            osu_user_id,
            row.osu_username,
            mode,
            row.created_at.and_utc(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(osu_id: i64, mode: &str) -> LinkedAccountRow {
        LinkedAccountRow {
            discord_id: "42".into(),
            osu_id,
            osu_username: "mrekk".into(),
            mode: mode.into(),
            created_at: NaiveDateTime::default(),
        }
    }

    #[test]
    fn row_converts_to_record() {
        let record = LinkRecord::try_from(row(7562902, "mania")).unwrap();
        assert_eq!(record.chat_user_id(), "42");
        assert_eq!(*record.osu_user_id(), 7562902);
        assert_eq!(*record.default_mode(), GameMode::Mania);
    }

    #[test]
    fn unknown_mode_is_a_serialization_error() {
        let err = LinkRecord::try_from(row(1, "catch")).unwrap_err();
        assert!(matches!(err.kind, DatabaseErrorKind::Serialization(_)));
    }

    #[test]
    fn negative_id_is_rejected() {
        assert!(LinkRecord::try_from(row(-1, "osu")).is_err());
    }
}
