//! SQLite-backed `OrderRepository` implementation using Diesel ORM.
//!
//! The orders table declares a foreign key on `matric_number`, but pooled
//! connections run with `PRAGMA foreign_keys = OFF`. Orders for unknown
//! accounts are stored as-is.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{OrderPersistenceError, OrderRepository};
use crate::domain::{MatricNumber, NewOrder, Order, OrderId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::json_serializers::{foods_from_json, foods_to_json};
use super::models::{NewOrderRow, OrderRow};
use super::pool::{DbPool, PoolError};
use super::schema::orders;

/// Diesel-backed implementation of the `OrderRepository` port.
#[derive(Clone)]
pub struct DieselOrderRepository {
    pool: DbPool,
}

impl DieselOrderRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> OrderPersistenceError {
    map_basic_pool_error(error, OrderPersistenceError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> OrderPersistenceError {
    map_basic_diesel_error(
        error,
        OrderPersistenceError::query,
        OrderPersistenceError::connection,
    )
}

fn row_to_order(row: OrderRow) -> Result<Order, OrderPersistenceError> {
    let matric_number = MatricNumber::new(&row.matric_number).map_err(|err| {
        OrderPersistenceError::query(format!("stored order {} is invalid: {err}", row.id))
    })?;
    let foods = foods_from_json(&row.foods).map_err(OrderPersistenceError::query)?;
    Ok(Order {
        id: OrderId::new(row.id),
        matric_number,
        foods,
    })
}

#[async_trait]
impl OrderRepository for DieselOrderRepository {
    async fn insert(&self, order: &NewOrder) -> Result<(), OrderPersistenceError> {
        let foods = foods_to_json(&order.foods)
            .map_err(|err| OrderPersistenceError::query(err.to_string()))?;
        let row = NewOrderRow {
            matric_number: order.matric_number.as_ref(),
            foods,
        };

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::insert_into(orders::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn list_for_account(
        &self,
        matric_number: &MatricNumber,
    ) -> Result<Vec<Order>, OrderPersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<OrderRow> = orders::table
            .filter(orders::matric_number.eq(matric_number.as_ref()))
            .order(orders::id.asc())
            .select(OrderRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_order).collect()
    }
}
