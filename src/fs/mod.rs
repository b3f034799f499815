//! Filesystem helpers for writing rendered prompts.

pub mod atomic;

pub use atomic::write_prompt_file;
