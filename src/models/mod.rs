// Request, result-table and series models

mod request;
mod series;
mod table;

pub use request::QueryRequest;
pub use series::{AnomalyPoint, AnomalySeries, TelemetrySeries, WideRow};
pub use table::ResultTable;
