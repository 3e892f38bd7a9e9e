use super::repository::OrderStatus;

/// How a `status_filter` query parameter restricts an order listing.
#[derive(Debug, PartialEq, Eq)]
pub enum StatusFilter {
    Any,
    Only(OrderStatus),
    /// The filter names no known status, so no order can match.
    Nothing,
}

impl StatusFilter {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None => Self::Any,
            Some(raw) if raw.is_empty() => Self::Any,
            Some(raw) => match raw.to_lowercase().parse::<OrderStatus>() {
                Ok(status) => Self::Only(status),
                Err(_) => Self::Nothing,
            },
        }
    }

    pub fn status(&self) -> Option<OrderStatus> {
        match self {
            Self::Only(status) => Some(*status),
            _ => None,
        }
    }
}
