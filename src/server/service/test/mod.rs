mod analytics;
mod auth;
mod reservation;
mod room;
mod room_service;
mod transaction;
