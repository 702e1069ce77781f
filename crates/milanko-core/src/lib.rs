pub mod client;
pub mod compare;
pub mod consts;
pub mod error;
pub mod layout;
pub mod params;
pub mod range;
pub mod resource;
pub mod stats;
