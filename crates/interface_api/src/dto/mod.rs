//! Request/response data transfer objects

pub mod policy;
pub mod claims;
pub mod guidance;
pub mod sessions;
pub mod assessments;
