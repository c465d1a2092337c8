pub mod overpass;
pub mod service;
