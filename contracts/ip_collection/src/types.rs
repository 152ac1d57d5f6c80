use soroban_sdk::{Address, String, contracttype};

#[derive(Clone, Debug)]
#[contracttype]
pub struct CollectionConfig {
    pub name: String,
    pub symbol: String,
    pub max_supply: u32,
    pub mint_cost: i128,
    pub mint_token: Address,
}

/// Administrative capabilities on a collection. Admins manage the mint cost,
/// held funds and role membership; minters may mint.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub enum Role {
    Admin,
    Minter,
}
