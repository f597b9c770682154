//! Test helpers module
//!
//! This module provides utilities for testing the hostel server:
//! a PostgreSQL test database and a small client for driving the router.

#![allow(dead_code)]

pub mod database_helper;
pub mod http_client;

pub use database_helper::*;
pub use http_client::*;
