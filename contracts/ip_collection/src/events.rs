use soroban_sdk::{Address, Env, contractevent};

#[contractevent]
#[derive(Clone, Debug)]
pub struct Minted {
    pub to: Address,
    pub token_id: u32,
    pub paid: i128,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct MintCostUpdated {
    pub old_cost: i128,
    pub new_cost: i128,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct Withdrawn {
    pub asset: Address,
    pub to: Address,
    pub amount: i128,
}

pub fn emit_minted(env: &Env, to: Address, token_id: u32, paid: i128) {
    Minted { to, token_id, paid }.publish(env);
}

pub fn emit_mint_cost_updated(env: &Env, old_cost: i128, new_cost: i128) {
    MintCostUpdated { old_cost, new_cost }.publish(env);
}

pub fn emit_withdrawn(env: &Env, asset: Address, to: Address, amount: i128) {
    Withdrawn { asset, to, amount }.publish(env);
}
