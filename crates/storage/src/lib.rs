#![forbid(unsafe_code)]

pub mod directory;
pub mod source;

pub use directory::DirectoryImageSource;
pub use source::{ImageSource, InMemoryImageSource, StorageError};
