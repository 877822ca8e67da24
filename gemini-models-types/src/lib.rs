//! Shared wire types for the Gemini models listing endpoint.

pub mod models;
