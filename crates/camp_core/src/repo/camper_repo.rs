//! Camper repository contract and SQLite implementation.
//!
//! # Invariants
//! - Campers are never deleted through this repository.
//! - `apply_camper_patch` writes only the fields present in the patch, and
//!   only after the whole patch validated.

use super::{parse_camper_row, RepoError, RepoResult};
use crate::model::camper::{Camper, CamperId, CamperPatch, NewCamper};
use crate::model::EntityKind;
use rusqlite::{params, Connection, Transaction, TransactionBehavior};

const CAMPER_SELECT_SQL: &str = "SELECT id, name, age FROM campers";

/// Repository interface for camper persistence.
pub trait CamperRepository {
    /// Inserts a camper and returns it with its assigned id.
    fn create_camper(&self, camper: &NewCamper) -> RepoResult<Camper>;
    fn get_camper(&self, id: CamperId) -> RepoResult<Option<Camper>>;
    /// Lists every camper ordered by id.
    fn list_campers(&self) -> RepoResult<Vec<Camper>>;
    /// Applies a partial update and returns the stored camper afterwards.
    fn apply_camper_patch(&self, id: CamperId, patch: &CamperPatch) -> RepoResult<Camper>;
}

/// SQLite-backed camper repository.
pub struct SqliteCamperRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCamperRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl CamperRepository for SqliteCamperRepository<'_> {
    fn create_camper(&self, camper: &NewCamper) -> RepoResult<Camper> {
        camper.validate()?;

        self.conn.execute(
            "INSERT INTO campers (name, age) VALUES (?1, ?2);",
            params![camper.name.as_str(), camper.age],
        )?;

        Ok(Camper {
            id: self.conn.last_insert_rowid(),
            name: camper.name.clone(),
            age: camper.age,
        })
    }

    fn get_camper(&self, id: CamperId) -> RepoResult<Option<Camper>> {
        load_camper(self.conn, id)
    }

    fn list_campers(&self) -> RepoResult<Vec<Camper>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CAMPER_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut campers = Vec::new();
        while let Some(row) = rows.next()? {
            campers.push(parse_camper_row(row)?);
        }
        Ok(campers)
    }

    fn apply_camper_patch(&self, id: CamperId, patch: &CamperPatch) -> RepoResult<Camper> {
        patch.validate()?;
        if patch.is_empty() {
            return load_camper(self.conn, id)?.ok_or(RepoError::NotFound {
                kind: EntityKind::Camper,
                id,
            });
        }

        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        let changed = tx.execute(
            "UPDATE campers
             SET
                name = COALESCE(?2, name),
                age = COALESCE(?3, age)
             WHERE id = ?1;",
            params![id, patch.name.as_deref(), patch.age],
        )?;
        if changed == 0 {
            return Err(RepoError::NotFound {
                kind: EntityKind::Camper,
                id,
            });
        }

        let camper = load_camper(&tx, id)?.ok_or(RepoError::NotFound {
            kind: EntityKind::Camper,
            id,
        })?;
        tx.commit()?;
        Ok(camper)
    }
}

fn load_camper(conn: &Connection, id: CamperId) -> RepoResult<Option<Camper>> {
    let mut stmt = conn.prepare(&format!("{CAMPER_SELECT_SQL} WHERE id = ?1;"))?;
    let mut rows = stmt.query([id])?;
    let camper = rows.next()?.map(parse_camper_row).transpose()?;
    Ok(camper)
}

