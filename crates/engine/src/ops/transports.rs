//! Transport leg CRUD, wired to the sync engine.

use crate::store::Collection;
use crate::{EngineError, NewTransportCmd, ResultEngine, Transport, UpdateTransportCmd};

use super::{Engine, ensure_non_negative_amount, normalize_required_name};

impl Engine {
    /// Create a transport leg and synthesize its derived records.
    pub fn new_transport(&self, cmd: NewTransportCmd) -> ResultEngine<Transport> {
        let from = normalize_required_name(&cmd.from, "transport origin")?;
        let to = normalize_required_name(&cmd.to, "transport destination")?;
        ensure_non_negative_amount(cmd.cost_minor, "transport cost")?;
        self.require_trip(&cmd.trip_id)?;

        let transport = Transport::new(
            cmd.trip_id,
            cmd.mode,
            from,
            to,
            cmd.identifier,
            cmd.cost_minor,
            cmd.start_date,
            cmd.depart_time,
        );

        let mut transports: Vec<Transport> = self.load(Collection::Transports)?;
        transports.push(transport.clone());
        self.save(Collection::Transports, &transports)?;

        self.synthesize_transport(&transport)?;
        Ok(transport)
    }

    /// Return a trip's transport legs.
    pub fn transports_for_trip(&self, trip_id: &str) -> ResultEngine<Vec<Transport>> {
        self.require_trip(trip_id)?;
        let transports: Vec<Transport> = self.load(Collection::Transports)?;
        Ok(transports
            .into_iter()
            .filter(|transport| transport.trip_id == trip_id)
            .collect())
    }

    /// Patch a transport leg and resynchronize its derived records from the
    /// new state. Updating an unknown id is an error so callers never assume
    /// a write happened.
    pub fn update_transport(
        &self,
        transport_id: &str,
        cmd: UpdateTransportCmd,
    ) -> ResultEngine<Transport> {
        let mut transports: Vec<Transport> = self.load(Collection::Transports)?;
        let transport = transports
            .iter_mut()
            .find(|transport| transport.id == transport_id)
            .ok_or_else(|| EngineError::KeyNotFound("transport not exists".to_string()))?;

        if let Some(mode) = cmd.mode {
            transport.mode = mode;
        }
        if let Some(from) = cmd.from {
            transport.from = normalize_required_name(&from, "transport origin")?;
        }
        if let Some(to) = cmd.to {
            transport.to = normalize_required_name(&to, "transport destination")?;
        }
        if let Some(identifier) = cmd.identifier {
            transport.identifier = identifier;
        }
        if let Some(cost_minor) = cmd.cost_minor {
            ensure_non_negative_amount(cost_minor, "transport cost")?;
            transport.cost_minor = cost_minor;
        }
        if let Some(start_date) = cmd.start_date {
            transport.start_date = start_date;
        }
        if let Some(depart_time) = cmd.depart_time {
            transport.depart_time = depart_time;
        }

        let updated = transport.clone();
        self.save(Collection::Transports, &transports)?;

        self.resynchronize_transport(&updated)?;
        Ok(updated)
    }

    /// Delete a transport leg and tear down exactly the derived records it
    /// owns. Deleting an already-absent id is a no-op.
    pub fn delete_transport(&self, transport_id: &str) -> ResultEngine<()> {
        let mut transports: Vec<Transport> = self.load(Collection::Transports)?;
        let before = transports.len();
        transports.retain(|transport| transport.id != transport_id);
        if transports.len() != before {
            self.save(Collection::Transports, &transports)?;
        }
        self.teardown_derived(transport_id)
    }
}
