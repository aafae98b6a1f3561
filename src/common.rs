// src/common.rs

pub mod envelope;
pub mod error;
