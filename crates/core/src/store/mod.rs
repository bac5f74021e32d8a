//! Persistent trip store.
//!
//! Owns the mutable [`BusNetwork`] and keeps it synchronized with two
//! durable slots, one per registry. Writes happen synchronously after every
//! mutation; a failed write is logged and the in-memory state stays
//! authoritative for the session. On open, an absent or unreadable slot
//! falls back to the built-in dataset for that registry only.

use chaka_transit::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};

use crate::dataset;
use crate::storage::{BUSES_SLOT, STOPS_SLOT, StateSlots, StorageError};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("a stop with id {0} already exists")]
    DuplicateStop(StopIdentifier),

    #[error("a bus with id {0} already exists")]
    DuplicateBus(BusIdentifier),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("serialization: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub struct TripStore {
    network: BusNetwork,
    slots: Box<dyn StateSlots>,
}

impl TripStore {
    /// Open the store, reading both slots and falling back to the built-in
    /// dataset for any slot that is absent or unreadable.
    pub fn open(slots: Box<dyn StateSlots>) -> Self {
        let stops: Vec<Stop> =
            load_slot(slots.as_ref(), STOPS_SLOT).unwrap_or_else(dataset::default_stops);
        let buses: Vec<Bus> =
            load_slot(slots.as_ref(), BUSES_SLOT).unwrap_or_else(dataset::default_buses);

        Self {
            network: BusNetwork::from_data(stops, buses),
            slots,
        }
    }

    /// Read access for the matcher, pickers and the assistant snapshot.
    pub fn network(&self) -> &BusNetwork {
        &self.network
    }

    // ---- Stop registry ----

    /// Add a stop. A duplicate id is rejected before the registry changes.
    pub fn add_stop(&mut self, stop: Stop) -> Result<(), StoreError> {
        if self.network.stop(&stop.id).is_some() {
            return Err(StoreError::DuplicateStop(stop.id));
        }
        self.network.add_stop(stop);
        self.persist();
        Ok(())
    }

    /// Replace the stop with the same id; unknown ids are a no-op.
    pub fn update_stop(&mut self, stop: Stop) {
        self.network.update_stop(stop);
        self.persist();
    }

    /// Remove a stop and strip it from every bus route.
    pub fn remove_stop(&mut self, id: &StopIdentifier) {
        self.network.remove_stop(id);
        self.persist();
    }

    // ---- Bus registry ----

    pub fn add_bus(&mut self, bus: Bus) -> Result<(), StoreError> {
        if self.network.bus(&bus.id).is_some() {
            return Err(StoreError::DuplicateBus(bus.id));
        }
        self.network.add_bus(bus);
        self.persist();
        Ok(())
    }

    pub fn update_bus(&mut self, bus: Bus) {
        self.network.update_bus(bus);
        self.persist();
    }

    pub fn remove_bus(&mut self, id: &BusIdentifier) {
        self.network.remove_bus(id);
        self.persist();
    }

    // ---- Lifecycle ----

    /// Restore the built-in dataset and clear the persisted state.
    pub fn reset_to_defaults(&mut self) {
        self.network = dataset::default_network();
        for slot in [STOPS_SLOT, BUSES_SLOT] {
            if let Err(err) = self.slots.clear(slot) {
                warn!(slot, %err, "failed to clear slot during reset");
            }
        }
    }

    /// Both registries as one pretty-printed JSON document, for the admin
    /// download. There is no import counterpart.
    pub fn export_json(&self) -> Result<String, StoreError> {
        let document = ExportDocument {
            stops: self.network.stops(),
            buses: self.network.buses(),
        };
        Ok(serde_json::to_string_pretty(&document)?)
    }

    // Fire-and-forget: mutations never fail on persistence, the session's
    // in-memory state wins and the failure is only logged.
    fn persist(&self) {
        if let Err(err) = self.try_persist() {
            error!(%err, "failed to persist registries");
        }
    }

    fn try_persist(&self) -> Result<(), StoreError> {
        let stops = serde_json::to_string(self.network.stops())?;
        self.slots.write(STOPS_SLOT, &stops)?;

        let buses = serde_json::to_string(self.network.buses())?;
        self.slots.write(BUSES_SLOT, &buses)?;

        debug!(
            stops = self.network.stops().len(),
            buses = self.network.buses().len(),
            "registries persisted"
        );
        Ok(())
    }
}

#[derive(Serialize)]
struct ExportDocument<'a> {
    stops: &'a [Stop],
    buses: &'a [Bus],
}

fn load_slot<T: DeserializeOwned>(slots: &dyn StateSlots, slot: &str) -> Option<Vec<T>> {
    match slots.read(slot) {
        Ok(Some(payload)) => match serde_json::from_str(&payload) {
            Ok(parsed) => Some(parsed),
            Err(err) => {
                warn!(slot, %err, "discarding unreadable slot, using defaults");
                None
            }
        },
        Ok(None) => None,
        Err(err) => {
            warn!(slot, %err, "slot read failed, using defaults");
            None
        }
    }
}
