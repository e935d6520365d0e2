pub mod account;
pub mod performer;
pub mod work;
