//! Durable key-value slots.
//!
//! The explicit serialize/deserialize boundary: registries are stored as two
//! independent string payloads under fixed slot names. There is no schema
//! versioning; an unreadable payload is the caller's problem to recover from
//! (the store falls back to the built-in dataset for that slot only).

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

/// Slot holding the serialized stop registry
pub const STOPS_SLOT: &str = "chaka_stops";
/// Slot holding the serialized bus registry
pub const BUSES_SLOT: &str = "chaka_buses";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage io: {0}")]
    Io(#[from] io::Error),

    #[error("storage poisoned")]
    Poisoned,
}

/// Load/save string payloads under fixed slot names.
///
/// Implementations can be directory-backed, in-memory, or remote.
pub trait StateSlots: Send + Sync {
    /// Read a slot. `Ok(None)` means the slot was never written.
    fn read(&self, slot: &str) -> Result<Option<String>, StorageError>;

    /// Write a slot, replacing any previous payload.
    fn write(&self, slot: &str, payload: &str) -> Result<(), StorageError>;

    /// Remove a slot. Clearing an absent slot is not an error.
    fn clear(&self, slot: &str) -> Result<(), StorageError>;
}

/// Directory-backed slots: one `<slot>.json` file per slot.
pub struct DirSlots {
    root: PathBuf,
}

impl DirSlots {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.root.join(format!("{slot}.json"))
    }
}

impl StateSlots for DirSlots {
    fn read(&self, slot: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.slot_path(slot)) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, slot: &str, payload: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)?;
        fs::write(self.slot_path(slot), payload)?;
        Ok(())
    }

    fn clear(&self, slot: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.slot_path(slot)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// In-memory slots for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemorySlots {
    slots: Mutex<HashMap<String, String>>,
}

impl MemorySlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a slot, e.g. to simulate a previous session.
    pub fn seed(self, slot: &str, payload: &str) -> Self {
        if let Ok(mut slots) = self.slots.lock() {
            slots.insert(slot.to_owned(), payload.to_owned());
        }
        self
    }
}

impl StateSlots for MemorySlots {
    fn read(&self, slot: &str) -> Result<Option<String>, StorageError> {
        let slots = self.slots.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(slots.get(slot).cloned())
    }

    fn write(&self, slot: &str, payload: &str) -> Result<(), StorageError> {
        let mut slots = self.slots.lock().map_err(|_| StorageError::Poisoned)?;
        slots.insert(slot.to_owned(), payload.to_owned());
        Ok(())
    }

    fn clear(&self, slot: &str) -> Result<(), StorageError> {
        let mut slots = self.slots.lock().map_err(|_| StorageError::Poisoned)?;
        slots.remove(slot);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_slots_round_trip() {
        let slots = MemorySlots::new();
        assert!(slots.read(STOPS_SLOT).unwrap().is_none());

        slots.write(STOPS_SLOT, "[]").unwrap();
        assert_eq!(slots.read(STOPS_SLOT).unwrap().as_deref(), Some("[]"));

        slots.clear(STOPS_SLOT).unwrap();
        assert!(slots.read(STOPS_SLOT).unwrap().is_none());
        // clearing twice is fine
        slots.clear(STOPS_SLOT).unwrap();
    }

    #[test]
    fn test_dir_slots_round_trip() {
        let root = std::env::temp_dir().join(format!("chaka-slots-{}", std::process::id()));
        let slots = DirSlots::new(&root);

        assert!(slots.read(BUSES_SLOT).unwrap().is_none());
        slots.write(BUSES_SLOT, "[{\"id\":\"raida\"}]").unwrap();
        assert_eq!(
            slots.read(BUSES_SLOT).unwrap().as_deref(),
            Some("[{\"id\":\"raida\"}]")
        );

        slots.clear(BUSES_SLOT).unwrap();
        assert!(slots.read(BUSES_SLOT).unwrap().is_none());
        slots.clear(BUSES_SLOT).unwrap();

        let _ = fs::remove_dir_all(&root);
    }
}
