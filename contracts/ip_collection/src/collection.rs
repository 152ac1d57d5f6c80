use crate::error::CollectionError;
use crate::events;
use crate::storage::DataKey;
use crate::types::{CollectionConfig, Role};
use soroban_sdk::{Address, Env, String, contract, contractimpl, panic_with_error, token};

/// The all-zero Stellar account strkey, rejected as an "unset" parameter.
pub(crate) const ZERO_ADDRESS: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

#[contract]
pub struct IpCollection;

#[contractimpl]
impl IpCollection {
    /// One-time setup. The owner receives both the admin and minter roles.
    pub fn initialize(
        env: Env,
        owner: Address,
        config: CollectionConfig,
    ) -> Result<(), CollectionError> {
        if env.storage().instance().has(&DataKey::Config) {
            panic_with_error!(&env, CollectionError::AlreadyInitialized);
        }

        let zero = Address::from_string(&String::from_str(&env, ZERO_ADDRESS));
        if config.mint_token == zero || owner == zero {
            return Err(CollectionError::ZeroAddressParam);
        }
        if config.max_supply == 0 {
            return Err(CollectionError::ZeroMaxSupply);
        }

        env.storage().instance().set(&DataKey::Config, &config);
        env.storage().instance().set(&DataKey::TotalSupply, &0u32);
        env.storage()
            .instance()
            .set(&DataKey::Role(owner.clone(), Role::Admin), &true);
        env.storage()
            .instance()
            .set(&DataKey::Role(owner, Role::Minter), &true);

        Ok(())
    }

    /// Mints the next sequential token to `to`, charging `caller` the current
    /// mint cost in the collection's payment token. The caller must hold the
    /// minter role. Insufficient balance or allowance on the payment token
    /// surfaces as the token contract's own error.
    pub fn mint(env: Env, caller: Address, to: Address) -> Result<u32, CollectionError> {
        caller.require_auth();

        if !Self::is_member(&env, &caller, Role::Minter) {
            return Err(CollectionError::CallerNotMinterRole);
        }

        let config: CollectionConfig = env.storage().instance().get(&DataKey::Config).unwrap();
        let total_supply: u32 = env
            .storage()
            .instance()
            .get(&DataKey::TotalSupply)
            .unwrap_or(0);

        if total_supply >= config.max_supply {
            return Err(CollectionError::MaxSupplyReached);
        }

        if config.mint_cost > 0 {
            token::Client::new(&env, &config.mint_token).transfer(
                &caller,
                &env.current_contract_address(),
                &config.mint_cost,
            );
        }

        // Token ids are sequential starting at 1.
        let token_id = total_supply + 1;
        env.storage().instance().set(&DataKey::Owner(token_id), &to);

        let balance: u32 = env
            .storage()
            .instance()
            .get(&DataKey::Balance(to.clone()))
            .unwrap_or(0);
        env.storage()
            .instance()
            .set(&DataKey::Balance(to.clone()), &(balance + 1));
        env.storage().instance().set(&DataKey::TotalSupply, &token_id);

        events::emit_minted(&env, to, token_id, config.mint_cost);

        Ok(token_id)
    }

    /// Replaces the mint cost. Admin only.
    pub fn set_mint_cost(env: Env, caller: Address, new_cost: i128) -> Result<(), CollectionError> {
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        let mut config: CollectionConfig = env.storage().instance().get(&DataKey::Config).unwrap();
        let old_cost = config.mint_cost;
        config.mint_cost = new_cost;
        env.storage().instance().set(&DataKey::Config, &config);

        events::emit_mint_cost_updated(&env, old_cost, new_cost);

        Ok(())
    }

    /// Transfers the collection's entire balance of `asset` to `to`. Admin only.
    pub fn withdraw_token(
        env: Env,
        caller: Address,
        asset: Address,
        to: Address,
    ) -> Result<(), CollectionError> {
        caller.require_auth();
        Self::require_admin(&env, &caller)?;

        let client = token::Client::new(&env, &asset);
        let amount = client.balance(&env.current_contract_address());
        client.transfer(&env.current_contract_address(), &to, &amount);

        events::emit_withdrawn(&env, asset, to, amount);

        Ok(())
    }

    pub fn grant_role(
        env: Env,
        caller: Address,
        account: Address,
        role: Role,
    ) -> Result<(), CollectionError> {
        caller.require_auth();
        Self::require_admin(&env, &caller)?;
        env.storage()
            .instance()
            .set(&DataKey::Role(account, role), &true);
        Ok(())
    }

    pub fn revoke_role(
        env: Env,
        caller: Address,
        account: Address,
        role: Role,
    ) -> Result<(), CollectionError> {
        caller.require_auth();
        Self::require_admin(&env, &caller)?;
        env.storage()
            .instance()
            .remove(&DataKey::Role(account, role));
        Ok(())
    }

    pub fn has_role(env: Env, account: Address, role: Role) -> bool {
        Self::is_member(&env, &account, role)
    }

    pub fn name(env: Env) -> String {
        let config: CollectionConfig = env.storage().instance().get(&DataKey::Config).unwrap();
        config.name
    }

    pub fn symbol(env: Env) -> String {
        let config: CollectionConfig = env.storage().instance().get(&DataKey::Config).unwrap();
        config.symbol
    }

    pub fn max_supply(env: Env) -> u32 {
        let config: CollectionConfig = env.storage().instance().get(&DataKey::Config).unwrap();
        config.max_supply
    }

    pub fn mint_cost(env: Env) -> i128 {
        let config: CollectionConfig = env.storage().instance().get(&DataKey::Config).unwrap();
        config.mint_cost
    }

    pub fn mint_token(env: Env) -> Address {
        let config: CollectionConfig = env.storage().instance().get(&DataKey::Config).unwrap();
        config.mint_token
    }

    pub fn total_supply(env: Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::TotalSupply)
            .unwrap_or(0)
    }

    pub fn balance_of(env: Env, owner: Address) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::Balance(owner))
            .unwrap_or(0)
    }

    pub fn owner_of(env: Env, token_id: u32) -> Option<Address> {
        env.storage().instance().get(&DataKey::Owner(token_id))
    }

    fn is_member(env: &Env, account: &Address, role: Role) -> bool {
        env.storage()
            .instance()
            .get(&DataKey::Role(account.clone(), role))
            .unwrap_or(false)
    }

    fn require_admin(env: &Env, account: &Address) -> Result<(), CollectionError> {
        if Self::is_member(env, account, Role::Admin) {
            Ok(())
        } else {
            Err(CollectionError::CallerNotAdminRole)
        }
    }
}
