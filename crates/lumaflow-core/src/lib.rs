pub mod buffer;
pub mod config;
pub mod consts;
pub mod crop;
pub mod engine;
pub mod error;
pub mod frame;
pub mod matching;
pub mod orientation;
pub mod render;
pub mod stream;
