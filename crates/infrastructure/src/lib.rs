//! Zonectl Infrastructure Layer
pub mod backends;
