use crate::types::Role;
use soroban_sdk::{Address, contracttype};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
    TotalSupply,
    Owner(u32),
    Balance(Address),
    Role(Address, Role),
}
