mod sheet;
mod valuation;
mod vehicle;

pub use sheet::{AuctionSheet, ParsedSheet, SheetId, SheetSummary};
pub use valuation::{Valuation, ValuationId};
pub use vehicle::{ParsedVehicle, Vehicle, VehicleId};
