//! SQLite persistence for couples, wedding records, partners and purchases.
//!
//! The store keeps one wedding record per couple account, serialized as a
//! JSON column. Writes replace the whole row: last writer wins, with no
//! field-level locking or concurrency token, matching the save semantics of
//! the editor. A connection is opened per call; SQLite serializes writers.

use std::path::{Path, PathBuf};

use common::model::partner::{NewPartner, Partner};
use common::model::purchase::Purchase;
use common::model::website::WebsiteSummary;
use common::model::wedding::WeddingRecord;
use rusqlite::{params, Connection};
use uuid::Uuid;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS users (
    id TEXT PRIMARY KEY,
    email TEXT NOT NULL UNIQUE,
    password TEXT NOT NULL,
    website_name TEXT NOT NULL UNIQUE,
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);
CREATE TABLE IF NOT EXISTS wedding_data (
    user_id TEXT PRIMARY KEY,
    data TEXT NOT NULL,
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);
CREATE TABLE IF NOT EXISTS partners (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    password TEXT NOT NULL,
    phone TEXT,
    company_name TEXT,
    status TEXT,
    created_at TEXT NOT NULL DEFAULT (datetime('now')),
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);
CREATE TABLE IF NOT EXISTS purchases (
    id TEXT PRIMARY KEY,
    partner_id TEXT,
    customer_id TEXT,
    template_id TEXT NOT NULL,
    purchase_type TEXT NOT NULL,
    amount REAL NOT NULL,
    status TEXT NOT NULL,
    created_at TEXT NOT NULL DEFAULT (datetime('now')),
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);
";

#[derive(Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Opens the store and creates the schema if needed.
    pub fn open(path: impl AsRef<Path>) -> Result<Store, String> {
        let store = Store {
            path: path.as_ref().to_path_buf(),
        };
        let conn = store.conn()?;
        conn.execute_batch(SCHEMA).map_err(|e| e.to_string())?;
        Ok(store)
    }

    fn conn(&self) -> Result<Connection, String> {
        Connection::open(&self.path).map_err(|e| e.to_string())
    }

    /// Creates a couple account. Fails with a readable message when the
    /// email is already registered.
    pub fn create_couple(
        &self,
        email: &str,
        password: &str,
        website_name: &str,
    ) -> Result<String, String> {
        let conn = self.conn()?;
        let id = Uuid::new_v4().to_string();
        conn.execute(
            "INSERT INTO users (id, email, password, website_name) VALUES (?1, ?2, ?3, ?4)",
            params![id, email, password, website_name],
        )
        .map_err(|e| match e {
            rusqlite::Error::SqliteFailure(err, _)
                if err.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                "This email is already registered".to_string()
            }
            other => other.to_string(),
        })?;
        Ok(id)
    }

    pub fn couple_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<String>, String> {
        let conn = self.conn()?;
        let mut stmt = conn
            .prepare("SELECT id FROM users WHERE email = ?1 AND password = ?2")
            .map_err(|e| e.to_string())?;
        let mut rows = stmt
            .query_map(params![email, password], |row| row.get::<_, String>(0))
            .map_err(|e| e.to_string())?;
        match rows.next() {
            Some(Ok(id)) => Ok(Some(id)),
            Some(Err(e)) => Err(e.to_string()),
            None => Ok(None),
        }
    }

    pub fn website_name_taken(&self, website_name: &str) -> Result<bool, String> {
        let conn = self.conn()?;
        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM users WHERE website_name = ?1",
                params![website_name],
                |row| row.get(0),
            )
            .map_err(|e| e.to_string())?;
        Ok(count > 0)
    }

    /// Replaces the stored wedding record for `user_id` with `record`,
    /// whole-row.
    pub fn upsert_wedding(&self, user_id: &str, record: &WeddingRecord) -> Result<(), String> {
        let data = record.to_json().map_err(|e| e.to_string())?;
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO wedding_data (user_id, data, updated_at)
             VALUES (?1, ?2, datetime('now'))
             ON CONFLICT(user_id) DO UPDATE SET data = ?2, updated_at = datetime('now')",
            params![user_id, data],
        )
        .map_err(|e| e.to_string())?;
        Ok(())
    }

    pub fn wedding_for_user(&self, user_id: &str) -> Result<Option<WeddingRecord>, String> {
        let conn = self.conn()?;
        let mut stmt = conn
            .prepare("SELECT data FROM wedding_data WHERE user_id = ?1")
            .map_err(|e| e.to_string())?;
        let mut rows = stmt
            .query_map(params![user_id], |row| row.get::<_, String>(0))
            .map_err(|e| e.to_string())?;
        match rows.next() {
            Some(Ok(data)) => WeddingRecord::from_json(&data)
                .map(Some)
                .map_err(|e| e.to_string()),
            Some(Err(e)) => Err(e.to_string()),
            None => Ok(None),
        }
    }

    pub fn partners(&self) -> Result<Vec<Partner>, String> {
        let conn = self.conn()?;
        let mut stmt = conn
            .prepare(
                "SELECT id, name, email, phone, company_name, status, created_at, updated_at
                 FROM partners ORDER BY created_at DESC",
            )
            .map_err(|e| e.to_string())?;
        let rows = stmt
            .query_map([], |row| {
                Ok(Partner {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    email: row.get(2)?,
                    phone: row.get(3)?,
                    company_name: row.get(4)?,
                    status: row.get(5)?,
                    created_at: row.get(6)?,
                    updated_at: row.get(7)?,
                })
            })
            .map_err(|e| e.to_string())?;
        Ok(rows.filter_map(Result::ok).collect())
    }

    pub fn insert_partner(&self, new: &NewPartner) -> Result<Partner, String> {
        let conn = self.conn()?;
        let id = Uuid::new_v4().to_string();
        conn.execute(
            "INSERT INTO partners (id, name, email, password, phone, company_name, status)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                id,
                new.name,
                new.email,
                new.password,
                new.phone,
                new.company_name,
                new.status
            ],
        )
        .map_err(|e| match e {
            rusqlite::Error::SqliteFailure(err, _)
                if err.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                "A partner with this email already exists".to_string()
            }
            other => other.to_string(),
        })?;

        conn.query_row(
            "SELECT id, name, email, phone, company_name, status, created_at, updated_at
             FROM partners WHERE id = ?1",
            params![id],
            |row| {
                Ok(Partner {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    email: row.get(2)?,
                    phone: row.get(3)?,
                    company_name: row.get(4)?,
                    status: row.get(5)?,
                    created_at: row.get(6)?,
                    updated_at: row.get(7)?,
                })
            },
        )
        .map_err(|e| e.to_string())
    }

    pub fn partner_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<Partner>, String> {
        let conn = self.conn()?;
        let mut stmt = conn
            .prepare(
                "SELECT id, name, email, phone, company_name, status, created_at, updated_at
                 FROM partners WHERE email = ?1 AND password = ?2",
            )
            .map_err(|e| e.to_string())?;
        let mut rows = stmt
            .query_map(params![email, password], |row| {
                Ok(Partner {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    email: row.get(2)?,
                    phone: row.get(3)?,
                    company_name: row.get(4)?,
                    status: row.get(5)?,
                    created_at: row.get(6)?,
                    updated_at: row.get(7)?,
                })
            })
            .map_err(|e| e.to_string())?;
        match rows.next() {
            Some(Ok(partner)) => Ok(Some(partner)),
            Some(Err(e)) => Err(e.to_string()),
            None => Ok(None),
        }
    }

    pub fn insert_purchase(
        &self,
        partner_id: &str,
        customer_id: &str,
        template_id: &str,
        purchase_type: &str,
        amount: f64,
        status: &str,
    ) -> Result<String, String> {
        let conn = self.conn()?;
        let id = Uuid::new_v4().to_string();
        conn.execute(
            "INSERT INTO purchases
                 (id, partner_id, customer_id, template_id, purchase_type, amount, status)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![id, partner_id, customer_id, template_id, purchase_type, amount, status],
        )
        .map_err(|e| e.to_string())?;
        Ok(id)
    }

    /// All purchases, newest first.
    pub fn purchases(&self) -> Result<Vec<Purchase>, String> {
        let conn = self.conn()?;
        let mut stmt = conn
            .prepare(
                "SELECT id, partner_id, customer_id, template_id, purchase_type,
                        amount, status, created_at, updated_at
                 FROM purchases ORDER BY created_at DESC",
            )
            .map_err(|e| e.to_string())?;
        let rows = stmt
            .query_map([], |row| {
                Ok(Purchase {
                    id: row.get(0)?,
                    partner_id: row.get(1)?,
                    customer_id: row.get(2)?,
                    template_id: row.get(3)?,
                    purchase_type: row.get(4)?,
                    amount: row.get(5)?,
                    status: row.get(6)?,
                    created_at: row.get(7)?,
                    updated_at: row.get(8)?,
                })
            })
            .map_err(|e| e.to_string())?;
        Ok(rows.filter_map(Result::ok).collect())
    }

    /// Purchases attributed to one partner, newest first.
    pub fn purchases_for_partner(&self, partner_id: &str) -> Result<Vec<Purchase>, String> {
        let conn = self.conn()?;
        let mut stmt = conn
            .prepare(
                "SELECT id, partner_id, customer_id, template_id, purchase_type,
                        amount, status, created_at, updated_at
                 FROM purchases WHERE partner_id = ?1 ORDER BY created_at DESC",
            )
            .map_err(|e| e.to_string())?;
        let rows = stmt
            .query_map(params![partner_id], |row| {
                Ok(Purchase {
                    id: row.get(0)?,
                    partner_id: row.get(1)?,
                    customer_id: row.get(2)?,
                    template_id: row.get(3)?,
                    purchase_type: row.get(4)?,
                    amount: row.get(5)?,
                    status: row.get(6)?,
                    created_at: row.get(7)?,
                    updated_at: row.get(8)?,
                })
            })
            .map_err(|e| e.to_string())?;
        Ok(rows.filter_map(Result::ok).collect())
    }

    /// Gallery rows: one entry per couple with a stored wedding record.
    pub fn websites(&self) -> Result<Vec<WebsiteSummary>, String> {
        let conn = self.conn()?;
        let mut stmt = conn
            .prepare(
                "SELECT u.website_name, w.data
                 FROM users u JOIN wedding_data w ON w.user_id = u.id
                 ORDER BY u.created_at DESC",
            )
            .map_err(|e| e.to_string())?;
        let rows = stmt
            .query_map([], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
            })
            .map_err(|e| e.to_string())?;

        let mut websites = Vec::new();
        for row in rows.filter_map(Result::ok) {
            let (website_name, data) = row;
            let record = WeddingRecord::from_json(&data).map_err(|e| e.to_string())?;
            websites.push(WebsiteSummary {
                bride_name: record.couple.bride_name,
                groom_name: record.couple.groom_name,
                website_name,
            });
        }
        Ok(websites)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::template::TemplateKey;
    use common::model::wedding::ColorScheme;
    use tempfile::TempDir;

    fn scratch_store() -> (TempDir, Store) {
        let dir = TempDir::new().unwrap();
        let store = Store::open(dir.path().join("test.sqlite")).unwrap();
        (dir, store)
    }

    #[test]
    fn couple_accounts_round_trip() {
        let (_dir, store) = scratch_store();
        let id = store
            .create_couple("couple@example.com", "9876", "priya-and-arun")
            .unwrap();

        assert_eq!(
            store
                .couple_by_credentials("couple@example.com", "9876")
                .unwrap(),
            Some(id)
        );
        assert_eq!(
            store
                .couple_by_credentials("couple@example.com", "wrong")
                .unwrap(),
            None
        );
        assert!(store.website_name_taken("priya-and-arun").unwrap());

        let err = store
            .create_couple("couple@example.com", "1234", "other-site")
            .unwrap_err();
        assert!(err.contains("already registered"));
    }

    #[test]
    fn wedding_record_round_trips_with_unmodeled_fields() {
        let (_dir, store) = scratch_store();
        let record = WeddingRecord::from_json(
            r#"{"template":"model_2","couple":{"groomName":"A"},"bookingRef":"BK-9"}"#,
        )
        .unwrap();

        store.upsert_wedding("u-1", &record).unwrap();
        let loaded = store.wedding_for_user("u-1").unwrap().unwrap();
        assert_eq!(loaded.template, TemplateKey::Model2);
        assert_eq!(loaded.extra.get("bookingRef").unwrap(), "BK-9");
        assert_eq!(store.wedding_for_user("nobody").unwrap(), None);
    }

    #[test]
    fn stored_rows_use_the_camel_case_wire_format() {
        let (_dir, store) = scratch_store();
        let record = WeddingRecord::from_json(r#"{"couple":{"groomName":"Arun"}}"#).unwrap();
        store.upsert_wedding("u-1", &record).unwrap();

        let conn = Connection::open(&store.path).unwrap();
        let data: String = conn
            .query_row(
                "SELECT data FROM wedding_data WHERE user_id = 'u-1'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        let json: serde_json::Value = serde_json::from_str(&data).unwrap();
        assert_eq!(json["couple"]["groomName"], "Arun");
        assert_eq!(json["template"], "model_4");
    }

    #[test]
    fn wedding_saves_replace_the_whole_row() {
        let (_dir, store) = scratch_store();
        let mut record = WeddingRecord::default();
        record.color_scheme = ColorScheme::Romantic;
        store.upsert_wedding("u-1", &record).unwrap();

        record.color_scheme = ColorScheme::Midnight;
        store.upsert_wedding("u-1", &record).unwrap();

        let loaded = store.wedding_for_user("u-1").unwrap().unwrap();
        assert_eq!(loaded.color_scheme, ColorScheme::Midnight);
    }

    #[test]
    fn partners_and_purchases_listings() {
        let (_dir, store) = scratch_store();
        let partner = store
            .insert_partner(&NewPartner {
                name: "Kerala Events".into(),
                email: "events@example.com".into(),
                password: "secret".into(),
                ..NewPartner::default()
            })
            .unwrap();

        assert_eq!(store.partners().unwrap().len(), 1);
        assert!(store
            .partner_by_credentials("events@example.com", "secret")
            .unwrap()
            .is_some());
        assert!(store
            .partner_by_credentials("events@example.com", "nope")
            .unwrap()
            .is_none());

        store
            .insert_purchase(&partner.id, "u-1", "model_4", "template", 4999.0, "pending")
            .unwrap();
        store
            .insert_purchase("someone-else", "u-2", "model_1", "template", 4999.0, "paid")
            .unwrap();

        assert_eq!(store.purchases().unwrap().len(), 2);
        let own = store.purchases_for_partner(&partner.id).unwrap();
        assert_eq!(own.len(), 1);
        assert_eq!(own[0].customer_id.as_deref(), Some("u-1"));
    }

    #[test]
    fn websites_join_users_with_their_records() {
        let (_dir, store) = scratch_store();
        let id = store
            .create_couple("couple@example.com", "9876", "priya-and-arun")
            .unwrap();
        let record = WeddingRecord::from_json(
            r#"{"couple":{"groomName":"Arun","brideName":"Priya"}}"#,
        )
        .unwrap();
        store.upsert_wedding(&id, &record).unwrap();

        let sites = store.websites().unwrap();
        assert_eq!(sites.len(), 1);
        assert_eq!(sites[0].website_name, "priya-and-arun");
        assert_eq!(sites[0].bride_name, "Priya");
        assert_eq!(sites[0].url(), "https://priya-and-arun.matson.app");
    }
}
