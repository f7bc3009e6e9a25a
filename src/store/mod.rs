// Aurora remote store boundary
// The store is an opaque collaborator; everything behind `RemoteStore` is
// replaceable (REST client in production, in-memory store in tests).

pub mod memory;
pub mod remote;

pub use memory::MemoryStore;
pub use remote::{RemoteStore, RestStore};
