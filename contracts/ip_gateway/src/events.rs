use soroban_sdk::{Address, Env, Vec, contractevent};

#[contractevent]
#[derive(Clone, Debug)]
pub struct CollectionCreated {
    pub creator: Address,
    pub collection: Address,
    pub id: u32,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct IpRegistered {
    pub collection: Address,
    pub token_id: u32,
    pub ip_id: Address,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct TermsAttached {
    pub ip_id: Address,
    pub license_terms_id: u64,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct DerivativeRegistered {
    pub ip_id: Address,
    pub parent_ip_ids: Vec<Address>,
    pub license_token_ids: Vec<u64>,
}

pub fn emit_collection_created(env: &Env, creator: Address, collection: Address, id: u32) {
    CollectionCreated {
        creator,
        collection,
        id,
    }
    .publish(env);
}

pub fn emit_ip_registered(env: &Env, collection: Address, token_id: u32, ip_id: Address) {
    IpRegistered {
        collection,
        token_id,
        ip_id,
    }
    .publish(env);
}

pub fn emit_terms_attached(env: &Env, ip_id: Address, license_terms_id: u64) {
    TermsAttached {
        ip_id,
        license_terms_id,
    }
    .publish(env);
}

pub fn emit_derivative_registered(
    env: &Env,
    ip_id: Address,
    parent_ip_ids: Vec<Address>,
    license_token_ids: Vec<u64>,
) {
    DerivativeRegistered {
        ip_id,
        parent_ip_ids,
        license_token_ids,
    }
    .publish(env);
}
