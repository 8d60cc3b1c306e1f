pub mod auth;
pub mod calendar;
pub mod dashboard;
pub mod manager;
pub mod requests;
