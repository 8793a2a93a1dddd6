// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use lot_keeper_domain::{LicensePlate, VehicleCategory};

/// A command represents a requested movement as data only.
///
/// Commands are the only way to change facility state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Park a vehicle.
    Park {
        /// The vehicle's plate.
        license_plate: LicensePlate,
        /// The category of spot the vehicle needs.
        vehicle_type: VehicleCategory,
    },
    /// Remove a parked vehicle.
    Exit {
        /// The vehicle's plate.
        license_plate: LicensePlate,
    },
}
