pub mod code;
pub mod format;
pub mod random;
pub mod store;
pub mod unique;
