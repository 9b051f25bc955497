pub mod demo;
pub mod verify;
