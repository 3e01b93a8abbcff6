//! RAII read transaction for consistent multi-query reads.

use crate::store::StoreResult;
use rusqlite::Connection;

/// A deferred read transaction.
///
/// Queries issued while the snapshot is alive see a single state of the store.
/// A deferred transaction only takes a shared lock, so the host application's
/// writer is never blocked for longer than the reads themselves. The snapshot
/// ends on drop unless `finish()` is called first.
pub struct ReadSnapshot<'a> {
    conn: &'a Connection,
    finished: bool,
}

impl<'a> ReadSnapshot<'a> {
    /// Begins a read transaction on the connection.
    pub(crate) fn begin(conn: &'a Connection) -> StoreResult<Self> {
        conn.execute_batch("BEGIN DEFERRED")?;
        Ok(Self {
            conn,
            finished: false,
        })
    }

    /// Ends the snapshot, surfacing any error from the store.
    pub fn finish(mut self) -> StoreResult<()> {
        self.conn.execute_batch("COMMIT")?;
        self.finished = true;
        Ok(())
    }
}

impl Drop for ReadSnapshot<'_> {
    fn drop(&mut self) {
        if !self.finished {
            // Nothing was written; rolling back only releases the read lock
            let _ = self.conn.execute_batch("ROLLBACK");
        }
    }
}
