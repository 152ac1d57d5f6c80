use soroban_sdk::{Address, BytesN, String, contracttype};

/// Constructor arguments for a collection deployed through the gateway.
/// Mirrors the collection contract's own config type field for field.
#[derive(Clone, Debug)]
#[contracttype]
pub struct CollectionConfig {
    pub name: String,
    pub symbol: String,
    pub max_supply: u32,
    pub mint_cost: i128,
    pub mint_token: Address,
}

/// Metadata bound to an IP entity at registration time.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct IpMetadata {
    pub metadata_uri: String,
    pub metadata_hash: BytesN<32>,
    pub nft_metadata_hash: BytesN<32>,
}

/// Programmable licensing terms. The licensing module registers identical
/// terms content at most once and hands back the existing id on repeats.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct PilTerms {
    pub transferable: bool,
    pub commercial_use: bool,
    pub commercial_rev_share: u32,
    pub derivatives_allowed: bool,
    pub currency: Address,
    pub default_minting_fee: i128,
    pub expiration: u64,
}

/// Action class a delegation grant authorizes the gateway to perform on
/// behalf of a controlling account.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub enum PermissionScope {
    AttachLicenseTerms,
    RegisterDerivative,
}

/// Caller-supplied authorization to act as a controlling account: an ed25519
/// signature by `signer` over the grant digest, valid until `deadline` and
/// consumable exactly once.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SignatureData {
    pub signer: BytesN<32>,
    pub deadline: u64,
    pub signature: BytesN<64>,
}
