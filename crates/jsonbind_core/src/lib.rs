//! Type-directed decoding of JSON trees into typed records.

/// Tree values, coercion rules, the decode engine, records, overrides, and entry points.
pub mod bind;
