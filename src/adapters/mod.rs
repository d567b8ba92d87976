// Adapters layer: concrete implementations for external systems (storage media, image decoding).

pub mod image_loader;
pub mod storage;

pub use storage::{LocalStorage, MemoryStorage};
