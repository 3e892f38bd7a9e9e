pub mod auth;
pub mod eater;
pub mod maker;
pub mod meal;
pub mod order;
pub mod review;
pub mod user;

mod router;
pub use router::get_router;
