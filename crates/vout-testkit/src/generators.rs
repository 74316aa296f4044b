//! Proptest generators for property-based testing.

use proptest::prelude::*;

use vout_core::constants::{ED25519_ADDRESS_LENGTH, WOTS_ADDRESS_LENGTH};
use vout_core::{Address, Ed25519Address, Keypair, Output, SigLockedSingleOutput, WotsAddress, TOTAL_SUPPLY};

/// Generate a random WOTS address.
pub fn wots_address() -> impl Strategy<Value = WotsAddress> {
    prop::collection::vec(any::<u8>(), WOTS_ADDRESS_LENGTH).prop_map(|bytes| {
        let mut raw = [0u8; WOTS_ADDRESS_LENGTH];
        raw.copy_from_slice(&bytes);
        WotsAddress::from_bytes(raw)
    })
}

/// Generate a random Ed25519 address.
pub fn ed25519_address() -> impl Strategy<Value = Ed25519Address> {
    any::<[u8; ED25519_ADDRESS_LENGTH]>().prop_map(Ed25519Address::from_bytes)
}

/// Generate an Ed25519 address derived from a keypair.
pub fn derived_address() -> impl Strategy<Value = Ed25519Address> {
    any::<[u8; 32]>()
        .prop_map(|seed| Ed25519Address::from_public_key(&Keypair::from_seed(&seed).public_key()))
}

/// Generate an address of any registered kind.
pub fn address() -> impl Strategy<Value = Address> {
    prop_oneof![
        wots_address().prop_map(Address::from),
        ed25519_address().prop_map(Address::from),
    ]
}

/// Generate a legal deposit amount.
pub fn amount() -> impl Strategy<Value = u64> {
    1u64..=TOTAL_SUPPLY
}

/// Parameters for generating an output.
#[derive(Debug, Clone)]
pub struct OutputParams {
    pub address: Address,
    pub amount: u64,
}

impl Arbitrary for OutputParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (address(), amount())
            .prop_map(|(address, amount)| OutputParams { address, amount })
            .boxed()
    }
}

/// Generate an output from parameters.
pub fn output_from_params(params: &OutputParams) -> SigLockedSingleOutput {
    SigLockedSingleOutput::new(params.address, params.amount)
}

/// Generate a batch of outputs with distinct addresses whose amounts sum
/// within the total supply.
pub fn output_batch(max_len: usize) -> impl Strategy<Value = Vec<Output>> {
    prop::collection::hash_set(ed25519_address(), 1..=max_len).prop_flat_map(|addresses| {
        let count = addresses.len() as u64;
        let addresses: Vec<_> = addresses.into_iter().collect();
        prop::collection::vec(1u64..=TOTAL_SUPPLY / count, addresses.len()).prop_map(
            move |amounts| {
                addresses
                    .iter()
                    .zip(amounts)
                    .map(|(a, amount)| SigLockedSingleOutput::new(*a, amount).into())
                    .collect()
            },
        )
    })
}
