// src/services/mod.rs
pub mod bls;
pub mod cache;
pub mod calculations;
pub mod holdings;
