pub mod car;
pub mod customer;
pub mod rental;

pub use car::{Car, CarUpdate, NewCar};
pub use customer::Customer;
pub use rental::{NewRental, RentalCreate, RentalView};
