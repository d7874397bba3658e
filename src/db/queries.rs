use crate::db::Database;
use crate::error::Result;
use rusqlite::params;

const ALERTS_ENABLED_KEY: &str = "alerts_enabled";

// Settings queries. The preference store is a plain key/value table;
// writes are last-write-wins.

impl Database {
    pub fn get_setting(&self, key: &str) -> Result<Option<String>> {
        self.with_conn(|conn| {
            conn.query_row(
                "SELECT value FROM settings WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()
            .map_err(Into::into)
        })
    }

    pub fn set_setting(&self, key: &str, value: &str) -> Result<()> {
        self.with_conn(|conn| {
            conn.execute(
                r#"
                INSERT INTO settings (key, value, updated_at)
                VALUES (?1, ?2, datetime('now'))
                ON CONFLICT(key) DO UPDATE SET
                    value = excluded.value,
                    updated_at = excluded.updated_at
                "#,
                params![key, value],
            )?;
            Ok(())
        })
    }

    /// The alert toggle, the single persisted preference. `None` when no
    /// value has been stored yet.
    pub fn alerts_preference(&self) -> Result<Option<bool>> {
        Ok(self.get_setting(ALERTS_ENABLED_KEY)?.map(|v| v != "false"))
    }

    pub fn alerts_enabled(&self) -> Result<bool> {
        Ok(self.alerts_preference()?.unwrap_or(true))
    }

    pub fn set_alerts_enabled(&self, enabled: bool) -> Result<()> {
        self.set_setting(ALERTS_ENABLED_KEY, if enabled { "true" } else { "false" })
    }
}

trait OptionalExt<T> {
    fn optional(self) -> rusqlite::Result<Option<T>>;
}

impl<T> OptionalExt<T> for rusqlite::Result<T> {
    fn optional(self) -> rusqlite::Result<Option<T>> {
        match self {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setting_round_trip() {
        let db = Database::open_in_memory().unwrap();
        assert_eq!(db.get_setting("region").unwrap(), None);
        db.set_setting("region", "Vidarbha").unwrap();
        assert_eq!(db.get_setting("region").unwrap().as_deref(), Some("Vidarbha"));
        // Last write wins
        db.set_setting("region", "Gujarat Saurashtra").unwrap();
        assert_eq!(
            db.get_setting("region").unwrap().as_deref(),
            Some("Gujarat Saurashtra")
        );
    }

    #[test]
    fn alerts_default_on() {
        let db = Database::open_in_memory().unwrap();
        assert!(db.alerts_enabled().unwrap());
    }

    #[test]
    fn alerts_toggle_persists() {
        let db = Database::open_in_memory().unwrap();
        db.set_alerts_enabled(false).unwrap();
        assert!(!db.alerts_enabled().unwrap());
        db.set_alerts_enabled(true).unwrap();
        assert!(db.alerts_enabled().unwrap());
    }
}
