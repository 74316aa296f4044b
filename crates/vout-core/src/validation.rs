//! Output validation: per-output and cross-output invariants.
//!
//! Validators are stateful. A validator is used either
//! - in isolation ([`OutputValidator::validate_isolated`]), which checks one
//!   output against the current state without changing it, or
//! - in a batch pass ([`OutputValidator::validate_and_accumulate`]), which
//!   folds each accepted output into the state.
//!
//! State belongs to one pass. Build a fresh [`ValidatorChain`] per pass;
//! reusing one across unrelated sets of outputs mixes their state.

use std::collections::HashMap;

use crate::address::AddressKind;
use crate::constants::TOTAL_SUPPLY;
use crate::error::{OutputPosition, ValidationError};
use crate::output::{Output, SigLockedSingleOutput};

/// A check run over sig locked single outputs.
pub trait OutputValidator {
    /// Check one output without mutating accumulated state.
    fn validate_isolated(&self, output: &SigLockedSingleOutput) -> Result<(), ValidationError>;

    /// Check the output at `index` of a batch and fold it into the state.
    fn validate_and_accumulate(
        &mut self,
        index: usize,
        output: &SigLockedSingleOutput,
    ) -> Result<(), ValidationError>;
}

/// Checks that every deposit is positive, within the total supply, and that
/// the deposits of one pass sum to at most the total supply.
#[derive(Debug, Clone, Default)]
pub struct DepositAmountValidator {
    sum: u64,
}

impl DepositAmountValidator {
    /// Create a validator with an empty running sum.
    pub fn new() -> Self {
        Self::default()
    }

    /// The sum of all deposits accumulated so far.
    pub fn sum(&self) -> u64 {
        self.sum
    }

    /// Run all checks, returning the sum including this deposit.
    fn check(&self, position: OutputPosition, amount: u64) -> Result<u64, ValidationError> {
        if amount == 0 {
            return Err(ValidationError::AmountZero { position });
        }
        if amount > TOTAL_SUPPLY {
            return Err(ValidationError::AmountExceedsSupply { amount, position });
        }
        match self.sum.checked_add(amount) {
            Some(sum) if sum <= TOTAL_SUPPLY => Ok(sum),
            _ => Err(ValidationError::SumExceedsSupply { position }),
        }
    }
}

impl OutputValidator for DepositAmountValidator {
    fn validate_isolated(&self, output: &SigLockedSingleOutput) -> Result<(), ValidationError> {
        self.check(OutputPosition::Isolated, output.amount).map(|_| ())
    }

    fn validate_and_accumulate(
        &mut self,
        index: usize,
        output: &SigLockedSingleOutput,
    ) -> Result<(), ValidationError> {
        self.sum = self.check(OutputPosition::Index(index), output.amount)?;
        Ok(())
    }
}

/// Checks that no two outputs of one pass deposit onto the same address.
///
/// Addresses are keyed by kind and raw bytes.
#[derive(Debug, Clone, Default)]
pub struct AddressUniqueValidator {
    seen: HashMap<(AddressKind, Vec<u8>), usize>,
}

impl AddressUniqueValidator {
    /// Create a validator that has seen no addresses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct addresses seen so far.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Whether no address has been seen yet.
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    fn key(output: &SigLockedSingleOutput) -> (AddressKind, Vec<u8>) {
        (output.address.kind(), output.address.raw_bytes().to_vec())
    }
}

impl OutputValidator for AddressUniqueValidator {
    fn validate_isolated(&self, output: &SigLockedSingleOutput) -> Result<(), ValidationError> {
        match self.seen.get(&Self::key(output)) {
            Some(&first) => Err(ValidationError::AddressAlreadyUsed { first }),
            None => Ok(()),
        }
    }

    fn validate_and_accumulate(
        &mut self,
        index: usize,
        output: &SigLockedSingleOutput,
    ) -> Result<(), ValidationError> {
        let key = Self::key(output);
        if let Some(&first) = self.seen.get(&key) {
            return Err(ValidationError::DuplicateAddress {
                first,
                duplicate: index,
            });
        }
        self.seen.insert(key, index);
        Ok(())
    }
}

/// An ordered list of validators applied to every output of a pass.
#[derive(Default)]
pub struct ValidatorChain {
    validators: Vec<Box<dyn OutputValidator + Send>>,
}

impl ValidatorChain {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// The chain every set of outputs must pass: deposit amounts, then
    /// address uniqueness.
    pub fn standard() -> Self {
        Self::new()
            .with(DepositAmountValidator::new())
            .with(AddressUniqueValidator::new())
    }

    /// Append a validator.
    pub fn with(mut self, validator: impl OutputValidator + Send + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    /// Number of validators in the chain.
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    /// Whether the chain has no validators.
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Apply every validator to every output in index order.
    ///
    /// Stops at the first failure.
    pub fn validate(&mut self, outputs: &[Output]) -> Result<(), ValidationError> {
        for (index, output) in outputs.iter().enumerate() {
            let output = output
                .as_sig_locked_single()
                .ok_or(ValidationError::UnknownOutputType {
                    position: OutputPosition::Index(index),
                })?;
            for validator in self.validators.iter_mut() {
                validator.validate_and_accumulate(index, output)?;
            }
        }
        Ok(())
    }

    /// Apply every validator to one output without accumulating.
    pub fn validate_isolated(&self, output: &Output) -> Result<(), ValidationError> {
        let output = output
            .as_sig_locked_single()
            .ok_or(ValidationError::UnknownOutputType {
                position: OutputPosition::Isolated,
            })?;
        for validator in &self.validators {
            validator.validate_isolated(output)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for ValidatorChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatorChain")
            .field("validators", &self.validators.len())
            .finish()
    }
}

/// Validate a set of outputs with a fresh [`ValidatorChain::standard`].
pub fn validate_outputs(outputs: &[Output]) -> Result<(), ValidationError> {
    ValidatorChain::standard().validate(outputs)
}
