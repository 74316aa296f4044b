//! Test fixtures and helpers.
//!
//! Common setup code for integration tests.

use vout_core::{
    Ed25519Address, Ed25519PublicKey, Keypair, Output, SigLockedSingleOutput, WotsAddress,
};

/// A test fixture owning a keypair and the address derived from it.
pub struct TestFixture {
    pub keypair: Keypair,
    pub address: Ed25519Address,
}

impl TestFixture {
    /// Create a new test fixture with a random keypair.
    pub fn new() -> Self {
        Self::from_keypair(Keypair::generate())
    }

    /// Create with a deterministic keypair from seed.
    pub fn with_seed(seed: [u8; 32]) -> Self {
        Self::from_keypair(Keypair::from_seed(&seed))
    }

    fn from_keypair(keypair: Keypair) -> Self {
        let address = Ed25519Address::from_public_key(&keypair.public_key());
        Self { keypair, address }
    }

    /// Get the keypair's public key.
    pub fn public_key(&self) -> Ed25519PublicKey {
        self.keypair.public_key()
    }

    /// Deposit `amount` onto this fixture's address.
    pub fn make_output(&self, amount: u64) -> SigLockedSingleOutput {
        SigLockedSingleOutput::new(self.address, amount)
    }

    /// Deposit `amount` onto a WOTS address filled with `fill`.
    pub fn make_wots_output(&self, fill: u8, amount: u64) -> SigLockedSingleOutput {
        SigLockedSingleOutput::new(WotsAddress::from_bytes([fill; 49]), amount)
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Create multiple test fixtures, each with a distinct address.
pub fn multi_party_fixtures(count: usize) -> Vec<TestFixture> {
    (0..count)
        .map(|i| {
            let mut seed = [0u8; 32];
            seed[..8].copy_from_slice(&(i as u64).to_le_bytes());
            TestFixture::with_seed(seed)
        })
        .collect()
}

/// One output per fixture, each depositing `amount`.
pub fn batch(fixtures: &[TestFixture], amount: u64) -> Vec<Output> {
    fixtures.iter().map(|f| f.make_output(amount).into()).collect()
}
