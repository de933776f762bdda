pub mod app;
pub mod cli;
pub mod clockify;
pub mod dates;
pub mod error;
pub mod matching;
pub mod models;
pub mod storage;
pub mod sync;
pub mod toggl;
pub mod transport;
