use super::repository::UpsertEaterProfilePayload;
use crate::modules::{
    order::repository::{Order, OrderStatus},
    review::service::ReviewSnippet,
    user::repository::User,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;

pub fn default_profile(eater: &User) -> UpsertEaterProfilePayload {
    UpsertEaterProfilePayload {
        eater_id: eater.id,
        display_name: eater.email_local_part().to_string(),
        phone: None,
        favorite_cuisine: None,
        note: None,
    }
}

#[derive(Serialize, Debug, PartialEq)]
pub struct EaterOrder {
    pub id: i64,
    pub maker_id: i64,
    pub eater_id: Option<i64>,
    pub order_code: String,
    pub eater_name: String,
    pub meal_name: String,
    pub image_data: String,
    pub price: f64,
    pub order_time: DateTime<Utc>,
    pub status: OrderStatus,
    pub review: Option<ReviewSnippet>,
}

impl EaterOrder {
    fn new(order: Order, review: Option<ReviewSnippet>) -> Self {
        Self {
            id: order.id,
            maker_id: order.maker_id,
            eater_id: order.eater_id,
            order_code: order.order_code,
            eater_name: order.eater_name,
            meal_name: order.meal_name,
            image_data: order.image_data,
            price: order.price,
            order_time: order.order_time,
            status: order.status,
            review,
        }
    }
}

/// Pairs each order with its review, keeping the order of `orders`.
pub fn with_reviews(
    orders: Vec<Order>,
    mut snippets: HashMap<i64, ReviewSnippet>,
) -> Vec<EaterOrder> {
    orders
        .into_iter()
        .map(|order| {
            let review = snippets.remove(&order.id);
            EaterOrder::new(order, review)
        })
        .collect()
}
