//!
//! Ingestion of road data files
//!
pub mod edge_list;
