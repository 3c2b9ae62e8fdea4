pub mod response_inspector;

pub use response_inspector::{ResponseClassification, ResponseInspector};
