//! Core - configuration

pub mod config;

pub use config::{
    DEFAULT_EVENT_CAPACITY, DepartedPolicy, DrainPolicy, ParsePolicyError, SeatingConfig,
};
