//! Query modules for the IPO calendar SDK.
//!
//! Each module provides a query struct that borrows from an
//! [`ApiClient`](crate::client::ApiClient) and exposes methods returning
//! `Result<T>` with typed model payloads.

pub mod brokers;
pub mod schedule;

pub use brokers::BrokerQuery;
pub use schedule::ScheduleQuery;
