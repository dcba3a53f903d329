//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod boost_repo;
pub mod car_part_repo;
pub mod driver_repo;

pub use boost_repo::BoostRepo;
pub use car_part_repo::CarPartRepo;
pub use driver_repo::DriverRepo;
