//! Throwaway SQL store holding the credential list for a single login
//! attempt.

mod csv;

pub use self::csv::CsvTable;

use crate::prelude::*;

use sqlx::{
    sqlite::{SqlitePoolOptions, SqliteRow},
    Row, ValueRef,
};

pub type DatabasePool = sqlx::SqlitePool;

/// Builds the login query by pasting the submitted values straight into
/// the SQL text. Quotes in either value end the string literal early.
pub fn login_query(username: &str, password: &str) -> String {
    format!(
        "SELECT username, password FROM users WHERE username='{}' AND password='{}'",
        username, password
    )
}

pub struct CredentialStore {
    pool: DatabasePool,
}

impl CredentialStore {
    /// Opens a private in-memory database and copies the table into it.
    pub async fn open(table: &CsvTable) -> Result<Self, sqlx::Error> {
        // A single connection that never expires, otherwise the memory
        // database would vanish with it.
        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;

        sqlx::query(&table.create_statement())
            .execute(&pool)
            .await?;

        let insert = table.insert_statement();
        for row in &table.rows {
            let mut query = sqlx::query(&insert);
            for value in row {
                query = query.bind(value.as_str());
            }
            query.execute(&pool).await?;
        }

        debug!(
            "Credential store opened with {} rows in `{}`",
            table.rows.len(),
            table.name
        );
        Ok(Self { pool })
    }

    /// Runs [`login_query`] and returns every row that reads as a
    /// username/password pair. Values of any storage class are read as
    /// text, rows with a `NULL` in either column are skipped.
    pub async fn find(&self, credentials: &Credentials) -> Result<Vec<Credentials>, sqlx::Error> {
        let query = login_query(&credentials.username, &credentials.password);
        debug!("Login query: {}", query);

        let rows = sqlx::query(&query).fetch_all(&self.pool).await?;
        let users = rows
            .iter()
            .filter_map(|row| {
                Some(Credentials {
                    username: text_column(row, 0)?,
                    password: text_column(row, 1)?,
                })
            })
            .collect();
        Ok(users)
    }

    pub async fn close(self) {
        self.pool.close().await;
    }
}

fn text_column(row: &SqliteRow, index: usize) -> Option<String> {
    if row.try_get_raw(index).ok()?.is_null() {
        return None;
    }
    row.try_get_unchecked(index).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> CsvTable {
        CsvTable::parse(
            "users",
            "username,password\nkanmu,gocon2025\nadmin,Adm1n$ecur3\nzip,qwerty123456\n",
        )
        .unwrap()
    }

    fn creds(username: &str, password: &str) -> Credentials {
        Credentials {
            username: username.to_owned(),
            password: password.to_owned(),
        }
    }

    #[test]
    fn test_login_query_interpolates() {
        assert_eq!(
            login_query("kanmu", "gocon2025"),
            "SELECT username, password FROM users WHERE username='kanmu' AND password='gocon2025'"
        );
        assert_eq!(
            login_query("' OR '1'='1' --", "x"),
            "SELECT username, password FROM users WHERE username='' OR '1'='1' --' AND password='x'"
        );
    }

    #[tokio::test]
    async fn test_find_exact() -> Result<()> {
        let store = CredentialStore::open(&table()).await?;

        let users = store.find(&creds("kanmu", "gocon2025")).await?;
        assert_eq!(users, [creds("kanmu", "gocon2025")]);

        let users = store.find(&creds("kanmu", "wrong")).await?;
        assert!(users.is_empty());

        let users = store.find(&creds("", "")).await?;
        assert!(users.is_empty());

        store.close().await;
        Ok(())
    }

    #[tokio::test]
    async fn test_find_injection() -> Result<()> {
        let store = CredentialStore::open(&table()).await?;

        let users = store.find(&creds("admin' OR '1'='1' --", "test")).await?;
        assert_eq!(users.len(), 3);
        assert!(users.contains(&creds("admin", "Adm1n$ecur3")));

        // Comment out the password check for a single user
        let users = store.find(&creds("zip' --", "")).await?;
        assert_eq!(users, [creds("zip", "qwerty123456")]);

        // Non-text values read as their text form
        let users = store.find(&creds("' UNION SELECT 1, 2.5 --", "")).await?;
        assert_eq!(users, [creds("1", "2.5")]);

        let users = store
            .find(&creds("' UNION SELECT NULL, 'x' UNION SELECT 'y', 'z' --", ""))
            .await?;
        assert_eq!(users, [creds("y", "z")]);

        let result = store.find(&creds("it's", "x")).await;
        assert!(result.is_err());

        store.close().await;
        Ok(())
    }

    #[tokio::test]
    async fn test_stores_are_isolated() -> Result<()> {
        let first = CredentialStore::open(&table()).await?;
        let second = CredentialStore::open(&table()).await?;

        sqlx::query("DELETE FROM users").execute(&first.pool).await?;

        assert!(first.find(&creds("kanmu", "gocon2025")).await?.is_empty());
        assert_eq!(second.find(&creds("kanmu", "gocon2025")).await?.len(), 1);

        first.close().await;
        second.close().await;
        Ok(())
    }
}
