use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CollectionError {
    AlreadyInitialized = 1,
    ZeroAddressParam = 2,
    ZeroMaxSupply = 3,
    CallerNotMinterRole = 4,
    CallerNotAdminRole = 5,
    MaxSupplyReached = 6,
}
