//! HTTP handlers.

pub mod cart_service;
pub mod health_service;
