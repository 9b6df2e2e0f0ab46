// Core modules implementing parsing, path resolution, extraction, and error modeling.
pub mod decode;
pub mod error;
pub mod path;
pub mod query;
pub mod value;
