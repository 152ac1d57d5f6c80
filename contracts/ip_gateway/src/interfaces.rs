//! Client traits for the contracts the gateway sequences. The registry,
//! licensing module and license-token mechanism are external collaborators;
//! only the surface consumed here is declared.

use crate::types::{CollectionConfig, IpMetadata, PermissionScope, PilTerms, SignatureData};
use soroban_sdk::{Address, Bytes, Env, Vec, contractclient};

/// Surface of the mintable collection contract the gateway drives.
#[contractclient(name = "CollectionClient")]
pub trait MintableCollection {
    fn initialize(env: Env, owner: Address, config: CollectionConfig);
    fn mint(env: Env, caller: Address, to: Address) -> u32;
}

/// The IP registration ledger. Registration is idempotent per
/// `(collection, token_id)` and returns the controlling account of the
/// IP entity derived from that pair.
#[contractclient(name = "IpAssetRegistryClient")]
pub trait IpAssetRegistry {
    fn register_ip(
        env: Env,
        collection: Address,
        token_id: u32,
        metadata: Option<IpMetadata>,
    ) -> Address;
}

/// The licensing module: idempotent terms registry, terms attachment and
/// derivative recording. `royalty_context` is passed through opaquely to the
/// royalty module behind it.
#[contractclient(name = "LicensingModuleClient")]
pub trait LicensingModule {
    fn register_terms(env: Env, terms: PilTerms) -> u64;
    fn attach_terms(env: Env, ip_id: Address, license_terms_id: u64);
    fn register_derivative_from_tokens(
        env: Env,
        ip_id: Address,
        license_token_ids: Vec<u64>,
        royalty_context: Bytes,
    );
}

/// Permission mechanism on an IP entity's controlling account. The account
/// checks that the grant was signed by a key authorized to control it and
/// installs a scope-limited permission for `grantee`; it reverts otherwise.
#[contractclient(name = "IpAccountClient")]
pub trait IpAccount {
    fn grant_permission(env: Env, grantee: Address, scope: PermissionScope, sig: SignatureData);
}

/// The license-token mechanism. Burning consumes the tokens and returns the
/// parent IP ids they were minted from; it reverts on tokens the owner does
/// not hold or that were already consumed.
#[contractclient(name = "LicenseTokenClient")]
pub trait LicenseToken {
    fn burn_tokens(env: Env, owner: Address, token_ids: Vec<u64>) -> Vec<Address>;
}
