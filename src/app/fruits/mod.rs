pub mod handler;
pub mod model;
pub mod service;
pub mod store;
pub mod views;

pub use model::{Fruit, FruitForm, NewFruit};
pub use service::FruitService;
pub use store::{FruitStore, MemoryFruitStore, StoreError};
