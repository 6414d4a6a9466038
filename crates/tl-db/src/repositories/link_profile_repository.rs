//! Link profile repository - document-per-user reads and writes over
//! profiles and their ordered link lists.
//!
//! Handle uniqueness lives in the store as a unique index. Writes that
//! touch the handle surface a violation as `DbError::HandleTaken`, so
//! callers never need a read-check-then-write pair.

use crate::{DbError, Result};

use tl_core::{LinkItem, LinkProfile};

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

pub struct LinkProfileRepository {
    pool: SqlitePool,
}

#[derive(sqlx::FromRow)]
struct ProfileRow {
    email: String,
    handle: Option<String>,
    profile_image: Option<String>,
    created_at: i64,
    updated_at: i64,
}

#[derive(sqlx::FromRow)]
struct LinkRow {
    title: String,
    url: String,
}

impl LinkProfileRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<LinkProfile>> {
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
                SELECT email, handle, profile_image, created_at, updated_at
                FROM link_profiles
                WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(self.load_profile(row).await?)),
            None => Ok(None),
        }
    }

    pub async fn find_by_handle(&self, handle: &str) -> Result<Option<LinkProfile>> {
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
                SELECT email, handle, profile_image, created_at, updated_at
                FROM link_profiles
                WHERE handle = ?
            "#,
        )
        .bind(handle)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(self.load_profile(row).await?)),
            None => Ok(None),
        }
    }

    /// Create the profile row if no document exists for this email yet.
    /// An existing document is left untouched, including its handle.
    pub async fn upsert(
        &self,
        email: &str,
        handle: &str,
        profile_image: Option<&str>,
    ) -> Result<()> {
        let now = Utc::now().timestamp();

        sqlx::query(
            r#"
                INSERT INTO link_profiles (email, handle, profile_image, created_at, updated_at)
                VALUES (?, ?, ?, ?, ?)
                ON CONFLICT(email) DO NOTHING
            "#,
        )
        .bind(email)
        .bind(handle)
        .bind(profile_image)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| Self::map_handle_violation(e, handle))?;

        Ok(())
    }

    /// Append one link to the end of the profile's list.
    ///
    /// Position read and insert run in one transaction. Concurrent appends
    /// to the same profile both land; their relative order is unspecified.
    pub async fn append_link(&self, email: &str, item: &LinkItem) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        let next_position: i64 = sqlx::query_scalar(
            r#"
                SELECT COALESCE(MAX(position) + 1, 0)
                FROM links
                WHERE profile_email = ?
            "#,
        )
        .bind(email)
        .fetch_one(&mut *tx)
        .await?;

        let now = Utc::now().timestamp();

        sqlx::query(
            r#"
                INSERT INTO links (profile_email, position, title, url, created_at)
                VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(email)
        .bind(next_position)
        .bind(&item.title)
        .bind(&item.url)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            r#"
                UPDATE link_profiles
                SET updated_at = ?
                WHERE email = ?
            "#,
        )
        .bind(now)
        .bind(email)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(())
    }

    /// Remove every link whose url matches. Returns the number removed;
    /// zero matches is not an error.
    pub async fn remove_links_by_url(&self, email: &str, url: &str) -> Result<u64> {
        let result = sqlx::query(
            r#"
                DELETE FROM links
                WHERE profile_email = ? AND url = ?
            "#,
        )
        .bind(email)
        .bind(url)
        .execute(&self.pool)
        .await?;

        let removed = result.rows_affected();

        if removed > 0 {
            let now = Utc::now().timestamp();
            sqlx::query(
                r#"
                    UPDATE link_profiles
                    SET updated_at = ?
                    WHERE email = ?
                "#,
            )
            .bind(now)
            .bind(email)
            .execute(&self.pool)
            .await?;
        }

        Ok(removed)
    }

    /// Point the profile at a new public handle.
    ///
    /// A single conditional write: the unique index rejects a handle owned
    /// by another profile with `HandleTaken`, and neither profile changes.
    /// An unknown email is a no-op.
    pub async fn set_handle(&self, email: &str, handle: &str) -> Result<()> {
        let now = Utc::now().timestamp();

        sqlx::query(
            r#"
                UPDATE link_profiles
                SET handle = ?, updated_at = ?
                WHERE email = ?
            "#,
        )
        .bind(handle)
        .bind(now)
        .bind(email)
        .execute(&self.pool)
        .await
        .map_err(|e| Self::map_handle_violation(e, handle))?;

        Ok(())
    }

    /// Create-or-update the profile image by email, returning the
    /// resulting profile. A profile created here has no handle yet.
    pub async fn set_image(&self, email: &str, image: &str) -> Result<LinkProfile> {
        let now = Utc::now().timestamp();

        sqlx::query(
            r#"
                INSERT INTO link_profiles (email, handle, profile_image, created_at, updated_at)
                VALUES (?, NULL, ?, ?, ?)
                ON CONFLICT(email) DO UPDATE
                SET profile_image = excluded.profile_image,
                    updated_at = excluded.updated_at
            "#,
        )
        .bind(email)
        .bind(image)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        self.find_by_email(email)
            .await?
            .ok_or_else(|| DbError::bad_document(format!("profile for {email} missing after upsert")))
    }

    async fn load_profile(&self, row: ProfileRow) -> Result<LinkProfile> {
        let links = sqlx::query_as::<_, LinkRow>(
            r#"
                SELECT title, url
                FROM links
                WHERE profile_email = ?
                ORDER BY position, id
            "#,
        )
        .bind(&row.email)
        .fetch_all(&self.pool)
        .await?;

        Ok(LinkProfile {
            email: row.email,
            handle: row.handle,
            profile_image: row.profile_image,
            links: links
                .into_iter()
                .map(|l| LinkItem {
                    title: l.title,
                    url: l.url,
                })
                .collect(),
            created_at: timestamp(row.created_at, "link_profiles.created_at")?,
            updated_at: timestamp(row.updated_at, "link_profiles.updated_at")?,
        })
    }

    #[track_caller]
    fn map_handle_violation(e: sqlx::Error, handle: &str) -> DbError {
        match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => DbError::handle_taken(handle),
            _ => DbError::from(e),
        }
    }
}

#[track_caller]
fn timestamp(ts: i64, column: &str) -> Result<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0)
        .ok_or_else(|| DbError::bad_document(format!("invalid timestamp in {column}")))
}
