//! Allowlist commitments.
//!
//! The same leaf and pair hashing backs both the on-chain [`verify`] and the
//! off-chain [`build_root`] / [`build_proof`] generator. Pairs are sorted
//! before hashing, so a proof is just the list of sibling hashes from leaf to
//! root with no left/right markers.

use soroban_sdk::xdr::ToXdr;
use soroban_sdk::{Address, Bytes, BytesN, Env, Vec};

pub fn leaf_hash(env: &Env, identity: &Address) -> BytesN<32> {
    env.crypto().keccak256(&identity.clone().to_xdr(env)).into()
}

pub fn hash_pair(env: &Env, a: &BytesN<32>, b: &BytesN<32>) -> BytesN<32> {
    let (a, b) = (a.to_array(), b.to_array());
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let mut payload = Bytes::from_array(env, &lo);
    payload.append(&Bytes::from_array(env, &hi));
    env.crypto().keccak256(&payload).into()
}

pub fn verify(env: &Env, root: &BytesN<32>, identity: &Address, proof: &Vec<BytesN<32>>) -> bool {
    let mut computed = leaf_hash(env, identity);
    for sibling in proof.iter() {
        computed = hash_pair(env, &computed, &sibling);
    }
    computed == *root
}

fn next_level(env: &Env, level: &Vec<BytesN<32>>) -> Vec<BytesN<32>> {
    let mut parents = Vec::new(env);
    let mut i = 0;
    while i < level.len() {
        let left = level.get_unchecked(i);
        if i + 1 < level.len() {
            parents.push_back(hash_pair(env, &left, &level.get_unchecked(i + 1)));
        } else {
            // odd node is carried up as-is
            parents.push_back(left);
        }
        i += 2;
    }
    parents
}

fn leaves(env: &Env, members: &Vec<Address>) -> Vec<BytesN<32>> {
    let mut out = Vec::new(env);
    for member in members.iter() {
        out.push_back(leaf_hash(env, &member));
    }
    out
}

/// Root over `members` in the given order, or `None` for an empty set.
pub fn build_root(env: &Env, members: &Vec<Address>) -> Option<BytesN<32>> {
    let mut level = leaves(env, members);
    if level.is_empty() {
        return None;
    }
    while level.len() > 1 {
        level = next_level(env, &level);
    }
    level.first()
}

/// Sibling path for `member`, or `None` when it is not in `members`.
pub fn build_proof(env: &Env, members: &Vec<Address>, member: &Address) -> Option<Vec<BytesN<32>>> {
    let mut index = members.first_index_of(member)?;
    let mut level = leaves(env, members);
    let mut proof = Vec::new(env);

    while level.len() > 1 {
        let sibling = if index % 2 == 0 { index + 1 } else { index - 1 };
        if sibling < level.len() {
            proof.push_back(level.get_unchecked(sibling));
        }
        level = next_level(env, &level);
        index /= 2;
    }
    Some(proof)
}
