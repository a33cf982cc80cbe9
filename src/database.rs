use std::{future::Future, mem};

use sqlx::postgres::PgPoolOptions;
use sqlx::{postgres::PgPool, PgConnection, Postgres, Transaction};

use crate::config::Config;
use crate::services::response::ServiceError;

/// Owns a pool handle and, between `begin` and `commit`/`rollback`, one transaction.
pub struct DatabaseExecutor {
	pool: PgPool,
	transaction: Option<Transaction<'static, Postgres>>,
}

impl DatabaseExecutor {
	pub fn new(pool: PgPool) -> Self {
		Self { pool, transaction: None }
	}
	pub fn transaction(&mut self) -> Result<&mut PgConnection, ServiceError> {
		match self.transaction.as_mut() {
			Some(trx) => Ok(&mut **trx),
			None => Err(ServiceError::DatabaseError("Transaction Has Not Begun!".into())),
		}
	}

	pub(crate) async fn begin(&mut self) -> Result<(), ServiceError> {
		match self.transaction.as_mut() {
			None => {
				self.transaction = Some(self.pool.begin().await?);
				Ok(())
			}
			Some(_trx) => {
				tracing::warn!("Transaction Begun Already!");
				Err(ServiceError::DatabaseError("Transaction Begun Already!".into()))
			}
		}
	}

	pub(crate) async fn commit(&mut self) -> Result<(), ServiceError> {
		let Some(trx) = mem::take(&mut self.transaction) else {
			return Err(ServiceError::DatabaseError("Transaction Has Not Begun!".into()));
		};
		trx.commit().await.map_err(|err| {
			tracing::error!("Error occurred during commit operation : {:?}", err);
			err.into()
		})
	}
	pub(crate) async fn rollback(&mut self) -> Result<(), ServiceError> {
		let Some(trx) = mem::take(&mut self.transaction) else {
			return Err(ServiceError::DatabaseError("Transaction Has Not Begun!".into()));
		};
		Ok(trx.rollback().await?)
	}
}

/// Finishes a failed unit of work: runs `rollback` and hands back `err`.
/// A failing rollback is logged and never replaces the original error.
pub(crate) async fn rollback_with<F>(
	err: ServiceError,
	rollback: F,
) -> ServiceError
where
	F: Future<Output = Result<(), ServiceError>>,
{
	if let Err(rollback_err) = rollback.await {
		tracing::error!("Rollback failed after {} : {}", err, rollback_err);
	}
	err
}

pub async fn connection_pool(
	config: &Config,
	url: &str,
) -> Result<PgPool, ServiceError> {
	let pool = PgPoolOptions::new().max_connections(config.max_connections).connect(url).await?;
	Ok(pool)
}

/// Applies the migrations under `migrations/`.
pub async fn migrate(pool: &PgPool) -> Result<(), ServiceError> {
	sqlx::migrate!("./migrations").run(pool).await?;
	Ok(())
}
