pub mod source;
pub mod stats;

// Re-export key types for convenience
pub use source::RecordTable;
