pub mod auth;
pub mod booking;
pub mod hotel;
pub mod room;
pub mod user;

#[cfg(test)]
mod test;
