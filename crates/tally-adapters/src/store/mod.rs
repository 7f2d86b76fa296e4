mod memory;
mod shared;

pub use memory::InMemoryStore;
pub use shared::SharedStore;
