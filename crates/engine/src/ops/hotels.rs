//! Hotel stay CRUD, wired to the sync engine.

use crate::store::Collection;
use crate::{EngineError, Hotel, NewHotelCmd, ResultEngine, UpdateHotelCmd};

use super::{Engine, ensure_non_negative_amount, normalize_required_name};

impl Engine {
    /// Create a hotel stay and synthesize its derived records.
    pub fn new_hotel(&self, cmd: NewHotelCmd) -> ResultEngine<Hotel> {
        let name = normalize_required_name(&cmd.name, "hotel")?;
        ensure_non_negative_amount(cmd.cost_minor, "hotel cost")?;
        if cmd.end_date < cmd.start_date {
            return Err(EngineError::InvalidDate(
                "hotel checkout before check-in".to_string(),
            ));
        }
        self.require_trip(&cmd.trip_id)?;

        let hotel = Hotel::new(
            cmd.trip_id,
            name,
            cmd.place,
            cmd.address,
            cmd.cost_minor,
            cmd.start_date,
            cmd.end_date,
        );

        let mut hotels: Vec<Hotel> = self.load(Collection::Hotels)?;
        hotels.push(hotel.clone());
        self.save(Collection::Hotels, &hotels)?;

        self.synthesize_hotel(&hotel)?;
        Ok(hotel)
    }

    /// Return a trip's hotel stays.
    pub fn hotels_for_trip(&self, trip_id: &str) -> ResultEngine<Vec<Hotel>> {
        self.require_trip(trip_id)?;
        let hotels: Vec<Hotel> = self.load(Collection::Hotels)?;
        Ok(hotels
            .into_iter()
            .filter(|hotel| hotel.trip_id == trip_id)
            .collect())
    }

    /// Patch a hotel stay and resynchronize its derived records from the new
    /// state. Updating an unknown id is an error so callers never assume a
    /// write happened.
    pub fn update_hotel(&self, hotel_id: &str, cmd: UpdateHotelCmd) -> ResultEngine<Hotel> {
        let mut hotels: Vec<Hotel> = self.load(Collection::Hotels)?;
        let hotel = hotels
            .iter_mut()
            .find(|hotel| hotel.id == hotel_id)
            .ok_or_else(|| EngineError::KeyNotFound("hotel not exists".to_string()))?;

        if let Some(name) = cmd.name {
            hotel.name = normalize_required_name(&name, "hotel")?;
        }
        if let Some(place) = cmd.place {
            hotel.place = place;
        }
        if let Some(address) = cmd.address {
            hotel.address = address;
        }
        if let Some(cost_minor) = cmd.cost_minor {
            ensure_non_negative_amount(cost_minor, "hotel cost")?;
            hotel.cost_minor = cost_minor;
        }
        if let Some(start_date) = cmd.start_date {
            hotel.start_date = start_date;
        }
        if let Some(end_date) = cmd.end_date {
            hotel.end_date = end_date;
        }
        if hotel.end_date < hotel.start_date {
            return Err(EngineError::InvalidDate(
                "hotel checkout before check-in".to_string(),
            ));
        }

        let updated = hotel.clone();
        self.save(Collection::Hotels, &hotels)?;

        self.resynchronize_hotel(&updated)?;
        Ok(updated)
    }

    /// Delete a hotel stay and tear down exactly the derived records it
    /// owns. Deleting an already-absent id is a no-op, so a retried delete
    /// cannot fail.
    pub fn delete_hotel(&self, hotel_id: &str) -> ResultEngine<()> {
        let mut hotels: Vec<Hotel> = self.load(Collection::Hotels)?;
        let before = hotels.len();
        hotels.retain(|hotel| hotel.id != hotel_id);
        if hotels.len() != before {
            self.save(Collection::Hotels, &hotels)?;
        }
        self.teardown_derived(hotel_id)
    }
}
