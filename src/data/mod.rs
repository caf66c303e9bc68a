//! Trip data: supported cities, the in-memory table and its loader

mod city;
mod loader;
mod types;

pub(crate) use city::{City, CityFiles};
pub(crate) use loader::load_trips;
pub(crate) use types::{Filters, Schema, TripRecord, TripTable};

#[cfg(test)]
pub(crate) use types::test_support;
