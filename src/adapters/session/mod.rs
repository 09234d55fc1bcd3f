//! Session storage adapters

mod filesystem;

pub use filesystem::FsSessionStorage;
