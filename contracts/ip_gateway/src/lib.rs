#![no_std]
pub mod delegation;
pub mod error;
pub mod events;
pub mod gateway;
pub mod interfaces;
pub mod storage;
pub mod types;

pub use crate::gateway::{IpGateway, IpGatewayClient};
