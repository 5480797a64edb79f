//! Integration tests for `DieselOrderRepository` against a temporary SQLite
//! file.

use campus_food::domain::ports::{AccountRepository, OrderRepository};
use campus_food::domain::{MatricNumber, NewOrder};
use campus_food::outbound::persistence::{DieselAccountRepository, DieselOrderRepository};

mod common;

use common::{TestDatabase, new_account};

fn order(matric_number: &str, foods: &[&str]) -> NewOrder {
    NewOrder::try_from_parts(
        matric_number,
        foods.iter().map(|item| (*item).to_owned()).collect(),
    )
    .expect("valid order")
}

fn items(order: &campus_food::domain::Order) -> Vec<&str> {
    order.foods.items().iter().map(String::as_str).collect()
}

#[tokio::test]
async fn foods_round_trip_in_order() {
    let db = TestDatabase::open().await;
    let accounts = DieselAccountRepository::new(db.pool.clone());
    let orders = DieselOrderRepository::new(db.pool.clone());
    accounts
        .insert(&new_account("CSC/2019/001", "pw"))
        .await
        .expect("account");

    orders
        .insert(&order("CSC/2019/001", &["rice", "beans"]))
        .await
        .expect("insert order");

    let matric = MatricNumber::new("CSC/2019/001").expect("valid key");
    let stored = orders.list_for_account(&matric).await.expect("list");
    assert_eq!(stored.len(), 1);
    assert_eq!(items(&stored[0]), ["rice", "beans"]);
    assert_eq!(stored[0].matric_number, matric);
}

#[tokio::test]
async fn orders_are_listed_by_ascending_id() {
    let db = TestDatabase::open().await;
    let orders = DieselOrderRepository::new(db.pool.clone());

    orders
        .insert(&order("CSC/2019/002", &["amala", "ewedu"]))
        .await
        .expect("first");
    orders
        .insert(&order("CSC/2019/003", &["bread"]))
        .await
        .expect("other account");
    orders
        .insert(&order("CSC/2019/002", &["jollof rice, extra pepper"]))
        .await
        .expect("second");

    let matric = MatricNumber::new("CSC/2019/002").expect("valid key");
    let stored = orders.list_for_account(&matric).await.expect("list");
    assert_eq!(stored.len(), 2);
    assert!(stored[0].id < stored[1].id);
    assert_eq!(items(&stored[0]), ["amala", "ewedu"]);
    assert_eq!(items(&stored[1]), ["jollof rice, extra pepper"]);
}

#[tokio::test]
async fn unknown_account_orders_are_stored() {
    let db = TestDatabase::open().await;
    let orders = DieselOrderRepository::new(db.pool.clone());

    orders
        .insert(&order("NOT/REGISTERED", &["rice"]))
        .await
        .expect("foreign key is not enforced");

    let matric = MatricNumber::new("NOT/REGISTERED").expect("valid key");
    assert_eq!(
        orders
            .list_for_account(&matric)
            .await
            .expect("list")
            .len(),
        1
    );
}
