pub mod auth;
pub mod intake;
pub mod partners;
pub mod purchases;
pub mod websites;
pub mod wedding;
