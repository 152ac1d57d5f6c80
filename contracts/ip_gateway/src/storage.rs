use soroban_sdk::{BytesN, contracttype};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Registry,
    LicensingModule,
    LicenseToken,
    CollectionCount,
    CollectionAddress(u32),
    ConsumedGrant(BytesN<32>),
}
