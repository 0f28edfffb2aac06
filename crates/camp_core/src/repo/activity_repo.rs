//! Activity repository contract and SQLite implementation.
//!
//! # Invariants
//! - Deleting an activity removes its signups first, inside the same
//!   IMMEDIATE transaction; no commit ever leaves a signup pointing at a
//!   missing activity.

use super::{parse_activity_row, RepoError, RepoResult};
use crate::model::activity::{Activity, ActivityId, NewActivity};
use crate::model::EntityKind;
use rusqlite::{params, Connection, Transaction, TransactionBehavior};

const ACTIVITY_SELECT_SQL: &str = "SELECT id, name, difficulty FROM activities";

/// Repository interface for activity persistence.
pub trait ActivityRepository {
    fn create_activity(&self, activity: &NewActivity) -> RepoResult<Activity>;
    fn get_activity(&self, id: ActivityId) -> RepoResult<Option<Activity>>;
    fn list_activities(&self) -> RepoResult<Vec<Activity>>;
    /// Deletes the activity and every signup referencing it as one unit.
    ///
    /// Returns the number of signups removed alongside the activity.
    fn delete_activity_cascade(&self, id: ActivityId) -> RepoResult<usize>;
}

/// SQLite-backed activity repository.
pub struct SqliteActivityRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteActivityRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ActivityRepository for SqliteActivityRepository<'_> {
    fn create_activity(&self, activity: &NewActivity) -> RepoResult<Activity> {
        activity.validate()?;

        self.conn.execute(
            "INSERT INTO activities (name, difficulty) VALUES (?1, ?2);",
            params![activity.name.as_str(), activity.difficulty],
        )?;

        Ok(Activity {
            id: self.conn.last_insert_rowid(),
            name: activity.name.clone(),
            difficulty: activity.difficulty,
        })
    }

    fn get_activity(&self, id: ActivityId) -> RepoResult<Option<Activity>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ACTIVITY_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id])?;
        let activity = rows.next()?.map(parse_activity_row).transpose()?;
        Ok(activity)
    }

    fn list_activities(&self) -> RepoResult<Vec<Activity>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ACTIVITY_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut activities = Vec::new();
        while let Some(row) = rows.next()? {
            activities.push(parse_activity_row(row)?);
        }
        Ok(activities)
    }

    fn delete_activity_cascade(&self, id: ActivityId) -> RepoResult<usize> {
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;

        let removed_signups = tx.execute("DELETE FROM signups WHERE activity_id = ?1;", [id])?;
        let removed = tx.execute("DELETE FROM activities WHERE id = ?1;", [id])?;
        if removed == 0 {
            return Err(RepoError::NotFound {
                kind: EntityKind::Activity,
                id,
            });
        }

        tx.commit()?;
        Ok(removed_signups)
    }
}
