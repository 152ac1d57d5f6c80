#![no_std]
pub mod collection;
pub mod error;
pub mod events;
pub mod storage;
pub mod types;

pub use crate::collection::{IpCollection, IpCollectionClient};
pub use crate::types::{CollectionConfig, Role};

#[cfg(test)]
mod test;
