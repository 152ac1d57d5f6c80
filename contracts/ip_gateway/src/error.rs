use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum GatewayError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    SignatureExpired = 3,
    GrantAlreadyConsumed = 4,
}
