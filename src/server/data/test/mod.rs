mod analytics;
mod customer;
mod reservation;
mod room;
mod transaction;
