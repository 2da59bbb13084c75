pub mod dashboard;
pub mod login;
pub mod stores;
pub mod transactions;
pub mod users;
