//! Entity module - SeaORM entity definitions for the database.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod message;

pub use message::{Entity as Message, Model as MessageModel};
