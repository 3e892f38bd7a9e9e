use super::repository::{CreateReviewPayload, Review};
use crate::modules::order::repository::Order;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, PartialEq, Eq)]
pub enum SnapshotError {
    OrderWithoutEater,
}

/// Copies the order fields a review carries. Orders placed without an eater
/// account cannot be reviewed.
pub fn snapshot(
    order: &Order,
    rating: i32,
    comment: String,
) -> Result<CreateReviewPayload, SnapshotError> {
    let eater_id = order.eater_id.ok_or(SnapshotError::OrderWithoutEater)?;

    Ok(CreateReviewPayload {
        maker_id: order.maker_id,
        eater_id,
        order_id: order.id,
        order_code: order.order_code.clone(),
        eater_name: order.eater_name.clone(),
        meal_name: order.meal_name.clone(),
        image_data: order.image_data.clone(),
        rating,
        comment,
    })
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ReviewSnippet {
    pub review_id: i64,
    pub rating: i32,
    pub comment: String,
    pub reply: Option<String>,
}

impl From<Review> for ReviewSnippet {
    fn from(review: Review) -> Self {
        Self {
            review_id: review.id,
            rating: review.rating,
            comment: review.comment,
            reply: review.reply,
        }
    }
}

/// Indexes review snippets by the order they belong to.
pub fn snippets_by_order_id(reviews: Vec<Review>) -> HashMap<i64, ReviewSnippet> {
    reviews
        .into_iter()
        .map(|review| (review.order_id, ReviewSnippet::from(review)))
        .collect()
}
