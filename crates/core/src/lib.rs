//! Core library for the task dashboard
//!
//! This crate contains the dashboard's business logic, including:
//! - The task model and the board reducer
//! - Filtering and column views
//! - Slot storage and the persisted task mirror
//! - The login session gate

pub mod board;
pub mod config;
pub mod error;
pub mod filter;
pub mod image;
pub mod session;
pub mod storage;
pub mod task;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
