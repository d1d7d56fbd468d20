pub mod brackets;
pub mod clubs;
pub mod players;
pub mod registrations;
pub mod rewards;
pub mod tables;
pub mod tournaments;
