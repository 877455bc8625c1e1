use crate::domain::errors::StorageError;

/// Key-value persistence port for small state blobs, such as the cart.
/// Synchronous by design: implementations are local (memory, a file on
/// disk, the platform's local storage), never a network hop.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}
