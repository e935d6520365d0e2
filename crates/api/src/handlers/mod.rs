pub mod auth;
pub mod performers;
pub mod works;
