use std::sync::Arc;

use diesel::prelude::*;

use crate::db::{get_connection, DbPool};
use crate::schema::currencies;

use super::currencies_errors::{CurrencyError, Result};
use super::currencies_model::{Currency, CurrencyChangeset, CurrencyDB};
use super::currencies_traits::CurrencyRepositoryTrait;

/// Repository for managing currency records in the database
pub struct CurrencyRepository {
    pool: Arc<DbPool>,
}

impl CurrencyRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        Self { pool }
    }
}

impl CurrencyRepositoryTrait for CurrencyRepository {
    fn get_by_code(&self, iso_4217_code: &str) -> Result<Option<Currency>> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| CurrencyError::DatabaseError(e.to_string()))?;

        currencies::table
            .filter(currencies::iso_4217.eq(iso_4217_code))
            .first::<CurrencyDB>(&mut conn)
            .optional()
            .map_err(|e| CurrencyError::DatabaseError(e.to_string()))
            .map(|row| row.map(Currency::from))
    }

    fn get_by_id(&self, currency_id: &str) -> Result<Option<Currency>> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| CurrencyError::DatabaseError(e.to_string()))?;

        currencies::table
            .find(currency_id)
            .first::<CurrencyDB>(&mut conn)
            .optional()
            .map_err(|e| CurrencyError::DatabaseError(e.to_string()))
            .map(|row| row.map(Currency::from))
    }

    fn list(&self) -> Result<Vec<Currency>> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| CurrencyError::DatabaseError(e.to_string()))?;

        currencies::table
            .load::<CurrencyDB>(&mut conn)
            .map_err(|e| CurrencyError::DatabaseError(e.to_string()))
            .map(|rows| rows.into_iter().map(Currency::from).collect())
    }

    fn create(&self, currency_name: &str, iso_4217_code: &str) -> Result<Currency> {
        let record = CurrencyDB {
            id: uuid::Uuid::new_v4().to_string(),
            name: currency_name.to_string(),
            iso_4217: iso_4217_code.to_string(),
        };

        let mut conn = get_connection(&self.pool)
            .map_err(|e| CurrencyError::DatabaseError(e.to_string()))?;

        diesel::insert_into(currencies::table)
            .values(&record)
            .execute(&mut conn)
            .map_err(|e| CurrencyError::DatabaseError(e.to_string()))?;

        Ok(record.into())
    }

    fn update(&self, currency_id: &str, changeset: CurrencyChangeset) -> Result<()> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| CurrencyError::DatabaseError(e.to_string()))?;

        diesel::update(currencies::table.find(currency_id))
            .set(&changeset)
            .execute(&mut conn)
            .map_err(|e| CurrencyError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    fn delete(&self, currency_id: &str) -> Result<()> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| CurrencyError::DatabaseError(e.to_string()))?;

        diesel::delete(currencies::table.find(currency_id))
            .execute(&mut conn)
            .map_err(|e| CurrencyError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    fn test_repository() -> (tempfile::TempDir, CurrencyRepository) {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let db_path = db_path.to_str().unwrap();

        db::init(db_path).unwrap();
        let pool = db::create_pool(db_path).unwrap();
        db::run_migrations(&pool).unwrap();

        (dir, CurrencyRepository::new(pool))
    }

    #[test]
    fn create_assigns_a_fresh_id() {
        let (_dir, repo) = test_repository();

        let real = repo.create("real", "BRL").unwrap();
        let dolar = repo.create("dolar", "USD").unwrap();

        assert_ne!(real.id, dolar.id);
        assert_eq!(real.name, "real");
        assert_eq!(real.iso_4217, "BRL");
    }

    #[test]
    fn finds_by_id_and_by_code() {
        let (_dir, repo) = test_repository();
        let created = repo.create("real", "BRL").unwrap();

        assert_eq!(repo.get_by_id(&created.id).unwrap(), Some(created.clone()));
        assert_eq!(repo.get_by_code("BRL").unwrap(), Some(created));
        assert_eq!(repo.get_by_id("missing").unwrap(), None);
        assert_eq!(repo.get_by_code("USD").unwrap(), None);
    }

    #[test]
    fn lists_all_rows() {
        let (_dir, repo) = test_repository();
        repo.create("real", "BRL").unwrap();
        repo.create("dolar", "USD").unwrap();

        let all = repo.list().unwrap();
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn update_writes_only_supplied_fields() {
        let (_dir, repo) = test_repository();
        let created = repo.create("real", "BRL").unwrap();

        repo.update(
            &created.id,
            CurrencyChangeset {
                name: Some("real brasileiro".to_string()),
                iso_4217: None,
            },
        )
        .unwrap();

        let reloaded = repo.get_by_id(&created.id).unwrap().unwrap();
        assert_eq!(reloaded.name, "real brasileiro");
        assert_eq!(reloaded.iso_4217, "BRL");

        repo.update(
            &created.id,
            CurrencyChangeset {
                name: None,
                iso_4217: Some("EUR".to_string()),
            },
        )
        .unwrap();

        let reloaded = repo.get_by_id(&created.id).unwrap().unwrap();
        assert_eq!(reloaded.name, "real brasileiro");
        assert_eq!(reloaded.iso_4217, "EUR");
    }

    #[test]
    fn delete_removes_the_row() {
        let (_dir, repo) = test_repository();
        let created = repo.create("real", "BRL").unwrap();

        repo.delete(&created.id).unwrap();
        assert_eq!(repo.get_by_id(&created.id).unwrap(), None);
    }

    #[test]
    fn store_accepts_duplicate_codes() {
        // Uniqueness is a service-level rule; the schema must not enforce it.
        let (_dir, repo) = test_repository();
        repo.create("real", "BRL").unwrap();
        repo.create("other real", "BRL").unwrap();

        assert_eq!(repo.list().unwrap().len(), 2);
    }
}
