pub mod config;
pub mod constants;
pub mod domain;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod seed;
pub mod source;
pub mod storage;
