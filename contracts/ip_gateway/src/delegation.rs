//! Signature-based permission delegation. A composite operation that acts on
//! a freshly registered IP entity cannot rely on any pre-existing grant, so
//! the caller supplies a signature by the entity's controlling key over
//! `(ip_id, grantee, scope, deadline)`. The gateway checks expiry and replay,
//! then presents the grant to the controlling account's own permission
//! mechanism, which validates signer authority and the signature before the
//! next step runs. A digest is only ever accepted once.

use crate::error::GatewayError;
use crate::interfaces::IpAccountClient;
use crate::storage::DataKey;
use crate::types::{PermissionScope, SignatureData};
use soroban_sdk::{Address, Bytes, BytesN, Env, xdr::ToXdr};

/// Digest a grant's signature is checked against: the controlling account,
/// the grantee, the permitted action class and the expiry, hashed together.
pub fn grant_digest(
    env: &Env,
    ip_id: &Address,
    grantee: &Address,
    scope: &PermissionScope,
    deadline: u64,
) -> BytesN<32> {
    let mut payload = Bytes::new(env);
    payload.append(&ip_id.clone().to_xdr(env));
    payload.append(&grantee.clone().to_xdr(env));
    payload.append(&scope.clone().to_xdr(env));
    payload.extend_from_array(&deadline.to_be_bytes());
    env.crypto().sha256(&payload).to_bytes()
}

/// Validates a delegation grant for the current contract and marks it
/// consumed. Fails if the deadline has elapsed or the digest was already
/// consumed by a committed operation. The controlling account at `ip_id`
/// checks that the signature was produced by a key authorized to control it;
/// a refusal there traps and reverts the operation with the rest of its
/// effects.
pub fn consume_grant(
    env: &Env,
    ip_id: &Address,
    scope: PermissionScope,
    sig: &SignatureData,
) -> Result<(), GatewayError> {
    if sig.deadline < env.ledger().timestamp() {
        return Err(GatewayError::SignatureExpired);
    }

    let digest = grant_digest(
        env,
        ip_id,
        &env.current_contract_address(),
        &scope,
        sig.deadline,
    );
    let key = DataKey::ConsumedGrant(digest);
    if env.storage().persistent().has(&key) {
        return Err(GatewayError::GrantAlreadyConsumed);
    }

    IpAccountClient::new(env, ip_id).grant_permission(
        &env.current_contract_address(),
        &scope,
        sig,
    );

    env.storage().persistent().set(&key, &true);

    Ok(())
}
