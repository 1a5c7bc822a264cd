//! Per-destination booking counters

use serde::{Deserialize, Serialize};

use super::BusType;

/// Running booking totals for one destination, split by bus type
///
/// Counts only ever grow; they are never reset, even across trips. The seat
/// index shown in a reference is capped at the tier capacity, but the
/// underlying count keeps climbing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatCounts {
    /// Total sprinter bookings ever recorded
    pub sprinter: u32,
    /// Total VIP bookings ever recorded
    pub vip: u32,
}

impl SeatCounts {
    /// Record one more booking for the given tier, returning the new total
    pub fn record(&mut self, bus_type: BusType) -> u32 {
        let slot = match bus_type {
            BusType::Sprinter => &mut self.sprinter,
            BusType::Vip => &mut self.vip,
        };
        *slot = slot.saturating_add(1);
        *slot
    }

    /// Current total for a tier
    pub const fn count_for(&self, bus_type: BusType) -> u32 {
        match bus_type {
            BusType::Sprinter => self.sprinter,
            BusType::Vip => self.vip,
        }
    }

    /// Seat index a new booking at this count would display
    pub fn seat_index(count: u32, bus_type: BusType) -> u32 {
        count.min(bus_type.capacity())
    }
}
