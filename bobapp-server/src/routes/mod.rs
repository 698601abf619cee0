//! HTTP route handlers

pub mod joke;
