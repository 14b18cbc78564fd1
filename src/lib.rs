// Library for tests to access modules

pub mod anomaly;
pub mod chart;
pub mod config;
pub mod credentials;
pub mod error;
pub mod kusto;
pub mod models;
pub mod pipeline;
pub mod routes;
pub mod version;
