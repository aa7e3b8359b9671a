//! Built-in vehicle catalog
//!
//! Efficiency is km/kWh for electric entries and km/L for everything else.
//! `data/vehicles.csv` carries the same rows for the CSV loader.

use super::{TerrainRatings, Vehicle, VehicleType};
use super::VehicleType::*;

#[allow(clippy::too_many_arguments)]
fn entry(
    name: &str,
    vehicle_type: VehicleType,
    range_km: u32,
    seats: u32,
    trunk_liters: u32,
    efficiency: f64,
    family_friendly: u8,
    price: u32,
    [city, highway, offroad]: [u8; 3],
) -> Vehicle {
    Vehicle {
        name: name.to_string(),
        vehicle_type,
        range_km,
        seats,
        trunk_liters,
        efficiency,
        family_friendly,
        price,
        terrain: TerrainRatings { city, highway, offroad },
    }
}

pub(super) fn vehicles() -> Vec<Vehicle> {
    vec![
        // Electric
        entry("Tesla Model 3", Electric, 576, 5, 425, 6.9, 7, 42, [9, 10, 3]),
        entry("Tesla Model Y", Electric, 533, 5, 854, 6.0, 8, 49, [9, 9, 4]),
        entry("Hyundai Ioniq 5", Electric, 488, 5, 531, 5.7, 8, 41, [9, 9, 3]),
        entry("Kia EV6", Electric, 499, 5, 490, 5.8, 7, 43, [9, 9, 4]),
        entry("Ford Mustang Mach-E", Electric, 490, 5, 840, 5.4, 7, 48, [8, 9, 5]),
        entry("Volkswagen ID.4", Electric, 410, 5, 543, 5.2, 8, 40, [8, 8, 4]),
        entry("Nissan Leaf", Electric, 349, 5, 435, 5.9, 6, 28, [9, 7, 2]),
        entry("Chevrolet Bolt EUV", Electric, 397, 5, 462, 6.0, 6, 33, [8, 7, 3]),
        // Hybrid
        entry("Toyota Prius", Hybrid, 950, 5, 457, 24.5, 6, 28, [9, 8, 2]),
        entry("Honda Insight", Hybrid, 850, 5, 428, 21.3, 6, 26, [9, 8, 2]),
        entry("Toyota RAV4 Hybrid", Hybrid, 900, 5, 580, 18.7, 8, 32, [8, 8, 5]),
        entry("Toyota Camry Hybrid", Hybrid, 980, 5, 428, 20.4, 7, 30, [8, 9, 2]),
        entry("Hyundai Ioniq Hybrid", Hybrid, 850, 5, 443, 22.1, 6, 24, [9, 8, 2]),
        entry("Kia Niro Hybrid", Hybrid, 888, 5, 548, 19.6, 7, 27, [8, 8, 3]),
        // SUVs
        entry("Toyota RAV4", Suv, 680, 5, 580, 13.2, 8, 28, [7, 8, 6]),
        entry("Honda CR-V", Suv, 650, 5, 590, 12.8, 8, 29, [7, 8, 5]),
        entry("Ford Explorer", Suv, 720, 7, 800, 10.2, 9, 38, [6, 8, 7]),
        entry("Toyota Highlander", Suv, 700, 8, 835, 11.1, 9, 38, [7, 8, 6]),
        entry("Jeep Grand Cherokee", Suv, 680, 5, 740, 9.8, 7, 42, [6, 7, 9]),
        entry("Subaru Outback", Suv, 710, 5, 920, 12.3, 7, 29, [7, 8, 8]),
        // Minivans
        entry("Honda Odyssey", Minivan, 750, 8, 929, 11.9, 10, 34, [8, 8, 3]),
        entry("Toyota Sienna", Minivan, 800, 8, 949, 15.3, 10, 36, [8, 8, 3]),
        entry("Chrysler Pacifica", Minivan, 720, 7, 915, 10.6, 9, 37, [7, 8, 3]),
        entry("Kia Carnival", Minivan, 710, 8, 1041, 11.1, 9, 33, [7, 8, 3]),
        // Sedans
        entry("Toyota Camry", Sedan, 800, 5, 428, 14.9, 7, 26, [8, 9, 2]),
        entry("Honda Accord", Sedan, 790, 5, 473, 15.3, 7, 27, [8, 9, 2]),
        entry("Toyota Corolla", Sedan, 750, 5, 371, 16.2, 6, 22, [9, 8, 2]),
        entry("Honda Civic", Sedan, 740, 5, 428, 15.7, 6, 23, [9, 8, 2]),
        // Compacts
        entry("Mazda 3", Compact, 690, 5, 374, 14.5, 5, 22, [8, 8, 2]),
        entry("Volkswagen Golf", Compact, 680, 5, 380, 14.1, 5, 24, [8, 8, 2]),
        entry("Hyundai Elantra", Compact, 720, 5, 402, 15.3, 5, 21, [8, 8, 2]),
        entry("Kia Forte", Compact, 710, 5, 434, 14.9, 5, 20, [8, 8, 2]),
    ]
}
