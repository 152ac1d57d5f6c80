use crate::delegation;
use crate::error::GatewayError;
use crate::events;
use crate::interfaces::{
    CollectionClient, IpAssetRegistryClient, LicenseTokenClient, LicensingModuleClient,
};
use crate::storage::DataKey;
use crate::types::{CollectionConfig, IpMetadata, PermissionScope, PilTerms, SignatureData};
use soroban_sdk::{
    Address, Bytes, BytesN, Env, Val, Vec, contract, contractimpl, panic_with_error,
};

/// Gateway over the IP protocol: each entry point is a fixed linear pipeline
/// across the collection, the registration ledger, the licensing module and
/// the license-token mechanism. Pipelines are all-or-nothing; any failing
/// step unwinds every state change of the invocation, including mints and
/// payments. The gateway itself holds no funds.
#[contract]
pub struct IpGateway;

#[contractimpl]
impl IpGateway {
    pub fn initialize(
        env: Env,
        registry: Address,
        licensing_module: Address,
        license_token: Address,
    ) {
        if env.storage().instance().has(&DataKey::Registry) {
            panic_with_error!(&env, GatewayError::AlreadyInitialized);
        }
        env.storage().instance().set(&DataKey::Registry, &registry);
        env.storage()
            .instance()
            .set(&DataKey::LicensingModule, &licensing_module);
        env.storage()
            .instance()
            .set(&DataKey::LicenseToken, &license_token);
        env.storage()
            .instance()
            .set(&DataKey::CollectionCount, &0u32);
    }

    /// Deploys a new collection contract, initializes it and records it.
    pub fn create_collection(
        env: Env,
        caller: Address,
        wasm_hash: BytesN<32>,
        salt: BytesN<32>,
        owner: Address,
        config: CollectionConfig,
    ) -> Result<Address, GatewayError> {
        caller.require_auth();

        let id: u32 = env
            .storage()
            .instance()
            .get(&DataKey::CollectionCount)
            .ok_or(GatewayError::NotInitialized)?;

        let constructor_args: Vec<Val> = Vec::new(&env);
        let collection = env
            .deployer()
            .with_address(caller.clone(), salt)
            .deploy_v2(wasm_hash, constructor_args);

        CollectionClient::new(&env, &collection).initialize(&owner, &config);

        env.storage()
            .instance()
            .set(&DataKey::CollectionAddress(id), &collection);
        env.storage()
            .instance()
            .set(&DataKey::CollectionCount, &(id + 1));

        events::emit_collection_created(&env, caller, collection.clone(), id);

        Ok(collection)
    }

    /// Mints from `collection` and registers the new token as an IP entity.
    /// The collection enforces that the caller holds its minter role and
    /// charges the caller the mint cost.
    pub fn mint_and_register_ip(
        env: Env,
        caller: Address,
        collection: Address,
        recipient: Address,
        metadata: Option<IpMetadata>,
    ) -> Result<(u32, Address), GatewayError> {
        caller.require_auth();
        let registry = Self::registry(env.clone())?;

        let (token_id, ip_id) =
            Self::mint_and_register(&env, &registry, &caller, &collection, &recipient, metadata);

        Ok((token_id, ip_id))
    }

    /// Idempotently registers a terms record and attaches it to an existing
    /// IP entity. Returns the resolved terms id.
    pub fn register_pil_terms_and_attach(
        env: Env,
        caller: Address,
        ip_id: Address,
        terms: PilTerms,
    ) -> Result<u64, GatewayError> {
        caller.require_auth();
        let licensing = Self::licensing_module(env.clone())?;

        let license_terms_id = Self::register_and_attach_terms(&env, &licensing, &ip_id, terms);

        Ok(license_terms_id)
    }

    /// Mint, register as an IP entity, then register-and-attach terms. A
    /// failure in the attach step unwinds the mint with the rest of the
    /// operation.
    pub fn mint_register_ip_attach_terms(
        env: Env,
        caller: Address,
        collection: Address,
        recipient: Address,
        metadata: Option<IpMetadata>,
        terms: PilTerms,
    ) -> Result<(u32, Address, u64), GatewayError> {
        caller.require_auth();
        let registry = Self::registry(env.clone())?;
        let licensing = Self::licensing_module(env.clone())?;

        let (token_id, ip_id) =
            Self::mint_and_register(&env, &registry, &caller, &collection, &recipient, metadata);
        let license_terms_id =
            Self::register_and_attach_terms(&env, &licensing, &ip_id, terms);

        Ok((token_id, ip_id, license_terms_id))
    }

    /// Registers a pre-existing token as an IP entity and attaches terms.
    /// Because the gateway did not mint the token, acting on the new entity
    /// requires a delegation grant scoped to attaching license terms.
    pub fn register_ip_and_attach_terms(
        env: Env,
        caller: Address,
        collection: Address,
        token_id: u32,
        metadata: Option<IpMetadata>,
        terms: PilTerms,
        sig: SignatureData,
    ) -> Result<(Address, u64), GatewayError> {
        caller.require_auth();
        let registry = Self::registry(env.clone())?;
        let licensing = Self::licensing_module(env.clone())?;

        let ip_id = Self::register_ip(&env, &registry, &collection, token_id, metadata);
        delegation::consume_grant(&env, &ip_id, PermissionScope::AttachLicenseTerms, &sig)?;
        let license_terms_id = Self::register_and_attach_terms(&env, &licensing, &ip_id, terms);

        Ok((ip_id, license_terms_id))
    }

    /// Mint, register as an IP entity, then redeem license tokens to record
    /// a derivative relationship to their parent IPs.
    pub fn mint_register_ip_make_derivative(
        env: Env,
        caller: Address,
        collection: Address,
        recipient: Address,
        metadata: Option<IpMetadata>,
        license_token_ids: Vec<u64>,
        royalty_context: Bytes,
    ) -> Result<(u32, Address), GatewayError> {
        caller.require_auth();
        let registry = Self::registry(env.clone())?;

        let (token_id, ip_id) =
            Self::mint_and_register(&env, &registry, &caller, &collection, &recipient, metadata);
        Self::make_derivative(&env, &caller, &ip_id, license_token_ids, royalty_context)?;

        Ok((token_id, ip_id))
    }

    /// Pre-existing-token variant of the derivative pipeline; requires a
    /// delegation grant scoped to derivative registration.
    pub fn register_ip_and_make_derivative(
        env: Env,
        caller: Address,
        collection: Address,
        token_id: u32,
        metadata: Option<IpMetadata>,
        license_token_ids: Vec<u64>,
        royalty_context: Bytes,
        sig: SignatureData,
    ) -> Result<Address, GatewayError> {
        caller.require_auth();
        let registry = Self::registry(env.clone())?;

        let ip_id = Self::register_ip(&env, &registry, &collection, token_id, metadata);
        delegation::consume_grant(&env, &ip_id, PermissionScope::RegisterDerivative, &sig)?;
        Self::make_derivative(&env, &caller, &ip_id, license_token_ids, royalty_context)?;

        Ok(ip_id)
    }

    pub fn registry(env: Env) -> Result<Address, GatewayError> {
        env.storage()
            .instance()
            .get(&DataKey::Registry)
            .ok_or(GatewayError::NotInitialized)
    }

    pub fn licensing_module(env: Env) -> Result<Address, GatewayError> {
        env.storage()
            .instance()
            .get(&DataKey::LicensingModule)
            .ok_or(GatewayError::NotInitialized)
    }

    pub fn license_token(env: Env) -> Result<Address, GatewayError> {
        env.storage()
            .instance()
            .get(&DataKey::LicenseToken)
            .ok_or(GatewayError::NotInitialized)
    }

    pub fn get_collection_count(env: Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::CollectionCount)
            .unwrap_or(0)
    }

    pub fn get_collection_address(env: Env, id: u32) -> Option<Address> {
        env.storage()
            .instance()
            .get(&DataKey::CollectionAddress(id))
    }

    fn mint_and_register(
        env: &Env,
        registry: &Address,
        caller: &Address,
        collection: &Address,
        recipient: &Address,
        metadata: Option<IpMetadata>,
    ) -> (u32, Address) {
        let token_id = CollectionClient::new(env, collection).mint(caller, recipient);
        let ip_id = Self::register_ip(env, registry, collection, token_id, metadata);
        (token_id, ip_id)
    }

    fn register_ip(
        env: &Env,
        registry: &Address,
        collection: &Address,
        token_id: u32,
        metadata: Option<IpMetadata>,
    ) -> Address {
        let ip_id =
            IpAssetRegistryClient::new(env, registry).register_ip(collection, &token_id, &metadata);
        events::emit_ip_registered(env, collection.clone(), token_id, ip_id.clone());
        ip_id
    }

    fn register_and_attach_terms(
        env: &Env,
        licensing: &Address,
        ip_id: &Address,
        terms: PilTerms,
    ) -> u64 {
        let client = LicensingModuleClient::new(env, licensing);
        let license_terms_id = client.register_terms(&terms);
        client.attach_terms(ip_id, &license_terms_id);
        events::emit_terms_attached(env, ip_id.clone(), license_terms_id);
        license_terms_id
    }

    fn make_derivative(
        env: &Env,
        caller: &Address,
        ip_id: &Address,
        license_token_ids: Vec<u64>,
        royalty_context: Bytes,
    ) -> Result<(), GatewayError> {
        let license_token = Self::license_token(env.clone())?;
        let licensing = Self::licensing_module(env.clone())?;

        let parent_ip_ids =
            LicenseTokenClient::new(env, &license_token).burn_tokens(caller, &license_token_ids);
        LicensingModuleClient::new(env, &licensing).register_derivative_from_tokens(
            ip_id,
            &license_token_ids,
            &royalty_context,
        );

        events::emit_derivative_registered(
            env,
            ip_id.clone(),
            parent_ip_ids,
            license_token_ids,
        );

        Ok(())
    }
}
