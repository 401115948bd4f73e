//! Progress display while the pipeline runs

pub mod reporter;
