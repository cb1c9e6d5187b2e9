//! Generate and verify bcrypt password hashes in the `{bcrypt}<hash>` format
//! Spring Security's `DelegatingPasswordEncoder` stores.

pub mod config;
pub mod dto;
pub mod handlers;
pub mod interceptors;
pub mod middleware;
pub mod models;
pub mod services;
pub mod utils;
