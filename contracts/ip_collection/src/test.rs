#![cfg(test)]

use crate::collection::{IpCollection, IpCollectionClient, ZERO_ADDRESS};
use crate::error::CollectionError;
use crate::types::{CollectionConfig, Role};
use soroban_sdk::{Address, Env, String, testutils::Address as _, token};

// 100 units of a 7-decimal asset.
const MINT_COST: i128 = 100_0000000;

fn config(env: &Env, mint_token: &Address, max_supply: u32) -> CollectionConfig {
    CollectionConfig {
        name: String::from_str(env, "Test IP Collection"),
        symbol: String::from_str(env, "TIP"),
        max_supply,
        mint_cost: MINT_COST,
        mint_token: mint_token.clone(),
    }
}

fn register_payment_token(env: &Env) -> Address {
    let issuer = Address::generate(env);
    env.register_stellar_asset_contract_v2(issuer).address()
}

#[test]
fn test_initialize_and_accessors() {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let payment = register_payment_token(&env);

    let contract_id = env.register_contract(None, IpCollection);
    let client = IpCollectionClient::new(&env, &contract_id);

    client.initialize(&owner, &config(&env, &payment, 100));

    assert_eq!(client.name(), String::from_str(&env, "Test IP Collection"));
    assert_eq!(client.symbol(), String::from_str(&env, "TIP"));
    assert_eq!(client.max_supply(), 100);
    assert_eq!(client.mint_cost(), MINT_COST);
    assert_eq!(client.mint_token(), payment);
    assert_eq!(client.total_supply(), 0);
    assert!(client.has_role(&owner, &Role::Admin));
    assert!(client.has_role(&owner, &Role::Minter));
}

#[test]
fn test_initialize_rejects_bad_params() {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let payment = register_payment_token(&env);
    let zero = Address::from_string(&String::from_str(&env, ZERO_ADDRESS));

    let contract_id = env.register_contract(None, IpCollection);
    let client = IpCollectionClient::new(&env, &contract_id);

    assert_eq!(
        client.try_initialize(&owner, &config(&env, &zero, 100)),
        Err(Ok(CollectionError::ZeroAddressParam))
    );
    assert_eq!(
        client.try_initialize(&zero, &config(&env, &payment, 100)),
        Err(Ok(CollectionError::ZeroAddressParam))
    );
    assert_eq!(
        client.try_initialize(&owner, &config(&env, &payment, 0)),
        Err(Ok(CollectionError::ZeroMaxSupply))
    );
}

#[test]
#[should_panic(expected = "Error(Contract, #1)")]
fn test_double_initialize_panics() {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let payment = register_payment_token(&env);

    let contract_id = env.register_contract(None, IpCollection);
    let client = IpCollectionClient::new(&env, &contract_id);

    client.initialize(&owner, &config(&env, &payment, 100));
    client.initialize(&owner, &config(&env, &payment, 100));
}

#[test]
fn test_mint_charges_cost_and_assigns_sequential_ids() {
    let env = Env::default();
    env.mock_all_auths();

    let alice = Address::generate(&env);
    let payment = register_payment_token(&env);
    let token_client = token::Client::new(&env, &payment);
    token::StellarAssetClient::new(&env, &payment).mint(&alice, &(1000 * MINT_COST));

    let contract_id = env.register_contract(None, IpCollection);
    let client = IpCollectionClient::new(&env, &contract_id);
    client.initialize(&alice, &config(&env, &payment, 100));

    assert_eq!(client.mint(&alice, &alice), 1);
    assert_eq!(client.mint(&alice, &alice), 2);

    assert_eq!(client.total_supply(), 2);
    assert_eq!(client.owner_of(&1), Some(alice.clone()));
    assert_eq!(client.owner_of(&2), Some(alice.clone()));
    assert_eq!(client.owner_of(&3), None);
    assert_eq!(client.balance_of(&alice), 2);
    assert_eq!(token_client.balance(&contract_id), 2 * MINT_COST);
    assert_eq!(token_client.balance(&alice), 998 * MINT_COST);

    // Raising the cost makes the next mint debit exactly the new cost.
    client.set_mint_cost(&alice, &(2 * MINT_COST));
    assert_eq!(client.mint(&alice, &alice), 3);

    assert_eq!(client.total_supply(), 3);
    // 100 + 100 + 200 units collected across the three mints.
    assert_eq!(token_client.balance(&contract_id), 4 * MINT_COST);
    assert_eq!(token_client.balance(&alice), 996 * MINT_COST);
}

#[test]
fn test_mint_fails_at_max_supply() {
    let env = Env::default();
    env.mock_all_auths();

    let alice = Address::generate(&env);
    let payment = register_payment_token(&env);
    let token_client = token::Client::new(&env, &payment);
    token::StellarAssetClient::new(&env, &payment).mint(&alice, &(1000 * MINT_COST));

    let contract_id = env.register_contract(None, IpCollection);
    let client = IpCollectionClient::new(&env, &contract_id);
    client.initialize(&alice, &config(&env, &payment, 2));

    client.mint(&alice, &alice);
    client.mint(&alice, &alice);

    let balance_before = token_client.balance(&alice);
    assert_eq!(
        client.try_mint(&alice, &alice),
        Err(Ok(CollectionError::MaxSupplyReached))
    );

    assert_eq!(client.total_supply(), 2);
    assert_eq!(token_client.balance(&alice), balance_before);
}

#[test]
fn test_mint_requires_minter_role() {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let mallory = Address::generate(&env);
    let payment = register_payment_token(&env);

    let contract_id = env.register_contract(None, IpCollection);
    let client = IpCollectionClient::new(&env, &contract_id);
    client.initialize(&owner, &config(&env, &payment, 100));

    assert_eq!(
        client.try_mint(&mallory, &mallory),
        Err(Ok(CollectionError::CallerNotMinterRole))
    );
    assert_eq!(client.total_supply(), 0);
}

#[test]
fn test_mint_without_funds_fails_and_leaves_state_unchanged() {
    let env = Env::default();
    env.mock_all_auths();

    let alice = Address::generate(&env);
    let payment = register_payment_token(&env);

    let contract_id = env.register_contract(None, IpCollection);
    let client = IpCollectionClient::new(&env, &contract_id);
    client.initialize(&alice, &config(&env, &payment, 100));

    // Alice holds no payment token; the asset's own balance error surfaces.
    assert!(client.try_mint(&alice, &alice).is_err());

    assert_eq!(client.total_supply(), 0);
    assert_eq!(client.owner_of(&1), None);
    assert_eq!(client.balance_of(&alice), 0);
}

#[test]
fn test_admin_only_administration() {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let mallory = Address::generate(&env);
    let payment = register_payment_token(&env);

    let contract_id = env.register_contract(None, IpCollection);
    let client = IpCollectionClient::new(&env, &contract_id);
    client.initialize(&owner, &config(&env, &payment, 100));

    assert_eq!(
        client.try_set_mint_cost(&mallory, &1),
        Err(Ok(CollectionError::CallerNotAdminRole))
    );
    assert_eq!(
        client.try_withdraw_token(&mallory, &payment, &mallory),
        Err(Ok(CollectionError::CallerNotAdminRole))
    );
    assert_eq!(
        client.try_grant_role(&mallory, &mallory, &Role::Minter),
        Err(Ok(CollectionError::CallerNotAdminRole))
    );
    assert_eq!(client.mint_cost(), MINT_COST);
}

#[test]
fn test_withdraw_transfers_full_balance() {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let bob = Address::generate(&env);
    let payment = register_payment_token(&env);
    let token_client = token::Client::new(&env, &payment);
    token::StellarAssetClient::new(&env, &payment).mint(&owner, &(10 * MINT_COST));

    let contract_id = env.register_contract(None, IpCollection);
    let client = IpCollectionClient::new(&env, &contract_id);
    client.initialize(&owner, &config(&env, &payment, 100));

    client.mint(&owner, &owner);
    client.mint(&owner, &owner);
    assert_eq!(token_client.balance(&contract_id), 2 * MINT_COST);

    client.withdraw_token(&owner, &payment, &bob);

    assert_eq!(token_client.balance(&contract_id), 0);
    assert_eq!(token_client.balance(&bob), 2 * MINT_COST);
}

#[test]
fn test_role_management() {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let bob = Address::generate(&env);
    let payment = register_payment_token(&env);
    token::StellarAssetClient::new(&env, &payment).mint(&bob, &(10 * MINT_COST));

    let contract_id = env.register_contract(None, IpCollection);
    let client = IpCollectionClient::new(&env, &contract_id);
    client.initialize(&owner, &config(&env, &payment, 100));

    client.grant_role(&owner, &bob, &Role::Minter);
    assert!(client.has_role(&bob, &Role::Minter));
    assert_eq!(client.mint(&bob, &bob), 1);

    client.revoke_role(&owner, &bob, &Role::Minter);
    assert!(!client.has_role(&bob, &Role::Minter));
    assert_eq!(
        client.try_mint(&bob, &bob),
        Err(Ok(CollectionError::CallerNotMinterRole))
    );
    assert_eq!(client.total_supply(), 1);
}
