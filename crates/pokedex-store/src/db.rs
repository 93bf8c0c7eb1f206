use crate::error::Result;
use crate::KeyValueStore;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;

// Holds two string-keyed entries (favorites, theme).
// Values are opaque text here; `prefs` gives them meaning.

pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn open(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(db_path)?;
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    pub fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS preferences (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
            );
            "#,
        )?;

        Ok(())
    }
}

impl KeyValueStore for Database {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM preferences WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            r#"
            INSERT INTO preferences (key, value, updated_at)
            VALUES (?1, ?2, CURRENT_TIMESTAMP)
            ON CONFLICT(key) DO UPDATE SET
                value = ?2,
                updated_at = CURRENT_TIMESTAMP
            "#,
            params![key, value],
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_absent_key_is_none() -> Result<()> {
        let db = Database::open_in_memory()?;
        assert_eq!(db.get("pokeTheme")?, None);
        Ok(())
    }

    #[test]
    fn test_set_overwrites() -> Result<()> {
        let db = Database::open_in_memory()?;
        db.set("pokeTheme", "dark")?;
        db.set("pokeTheme", "light")?;

        assert_eq!(db.get("pokeTheme")?.as_deref(), Some("light"));
        let rows: i64 = db
            .conn
            .query_row("SELECT COUNT(*) FROM preferences", [], |row| row.get(0))?;
        assert_eq!(rows, 1);
        Ok(())
    }

    #[test]
    fn test_values_survive_reopen() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("nested").join("pokedex.db");

        {
            let db = Database::open(&path)?;
            db.set("pokeFavorites", "[1,4,7]")?;
        }

        let reopened = Database::open(&path)?;
        assert_eq!(reopened.get("pokeFavorites")?.as_deref(), Some("[1,4,7]"));
        Ok(())
    }
}
