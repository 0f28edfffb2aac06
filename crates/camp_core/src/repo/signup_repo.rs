//! Signup repository contract and SQLite implementation.
//!
//! # Invariants
//! - Inserts do not pre-check camper/activity existence; dangling references
//!   come back from the store as `RepoError::Constraint`.

use super::{parse_signup_detail_row, parse_signup_row, RepoResult, SIGNUP_DETAIL_SELECT_SQL};
use crate::model::activity::ActivityId;
use crate::model::camper::CamperId;
use crate::model::signup::{NewSignup, Signup, SignupDetail, SignupId};
use rusqlite::{params, Connection};

/// Repository interface for signup persistence.
pub trait SignupRepository {
    fn create_signup(&self, signup: &NewSignup) -> RepoResult<Signup>;
    fn get_signup(&self, id: SignupId) -> RepoResult<Option<Signup>>;
    /// Gets one signup joined with its camper and activity.
    fn get_signup_detail(&self, id: SignupId) -> RepoResult<Option<SignupDetail>>;
    fn list_signups_for_camper(&self, camper_id: CamperId) -> RepoResult<Vec<SignupDetail>>;
    fn list_signups_for_activity(&self, activity_id: ActivityId)
        -> RepoResult<Vec<SignupDetail>>;
}

/// SQLite-backed signup repository.
pub struct SqliteSignupRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteSignupRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn query_details(&self, filter: &str, value: i64) -> RepoResult<Vec<SignupDetail>> {
        let mut stmt = self.conn.prepare(&format!(
            "{SIGNUP_DETAIL_SELECT_SQL} WHERE {filter} = ?1 ORDER BY s.id ASC;"
        ))?;
        let mut rows = stmt.query([value])?;
        let mut details = Vec::new();
        while let Some(row) = rows.next()? {
            details.push(parse_signup_detail_row(row)?);
        }
        Ok(details)
    }
}

impl SignupRepository for SqliteSignupRepository<'_> {
    fn create_signup(&self, signup: &NewSignup) -> RepoResult<Signup> {
        signup.validate()?;

        self.conn.execute(
            "INSERT INTO signups (time, camper_id, activity_id) VALUES (?1, ?2, ?3);",
            params![signup.time, signup.camper_id, signup.activity_id],
        )?;

        Ok(Signup {
            id: self.conn.last_insert_rowid(),
            time: signup.time,
            camper_id: signup.camper_id,
            activity_id: signup.activity_id,
        })
    }

    fn get_signup(&self, id: SignupId) -> RepoResult<Option<Signup>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, time, camper_id, activity_id FROM signups WHERE id = ?1;")?;
        let mut rows = stmt.query([id])?;
        let signup = rows.next()?.map(parse_signup_row).transpose()?;
        Ok(signup)
    }

    fn get_signup_detail(&self, id: SignupId) -> RepoResult<Option<SignupDetail>> {
        Ok(self.query_details("s.id", id)?.into_iter().next())
    }

    fn list_signups_for_camper(&self, camper_id: CamperId) -> RepoResult<Vec<SignupDetail>> {
        self.query_details("s.camper_id", camper_id)
    }

    fn list_signups_for_activity(
        &self,
        activity_id: ActivityId,
    ) -> RepoResult<Vec<SignupDetail>> {
        self.query_details("s.activity_id", activity_id)
    }
}
