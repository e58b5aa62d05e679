use near_sdk::{near, AccountId};

use crate::{
    event::{DonationEvent, WithdrawalEvent},
    JarError, TokenAmount,
};

/// The `JarLedger` struct is the jar's whole state: the tokens it holds and
/// the message left by the latest donor.
///
/// It is host-independent: the caller's account id is an explicit argument
/// and every successful mutation returns the event record it produced, so a
/// host binding can log it and a test can check that mutations and events
/// pair up one-to-one. A rejected call returns an error and changes nothing.
#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct JarLedger {
    balance: TokenAmount,
    message: String,
}

impl JarLedger {
    pub fn new(initial_message: String) -> Self {
        Self {
            balance: 0,
            message: initial_message,
        }
    }

    /// Adds `amount` to the jar and overwrites the message.
    ///
    /// Rejects a zero donation with [`JarError::ZeroDonation`].
    pub fn donate(
        &mut self,
        by: AccountId,
        amount: TokenAmount,
        message: String,
    ) -> Result<DonationEvent, JarError> {
        if amount == 0 {
            return Err(JarError::ZeroDonation);
        }

        self.balance += amount;
        self.message = message.clone();

        Ok(DonationEvent::new(by, amount, message))
    }

    /// Removes `amount` from the jar.
    ///
    /// Preconditions, checked in order against the balance as of this call:
    /// the jar is not empty, the amount is positive, and the amount does not
    /// exceed half of the balance (integer division, so with an odd balance
    /// the bound rounds down). The message is never touched.
    pub fn take(&mut self, by: AccountId, amount: TokenAmount) -> Result<WithdrawalEvent, JarError> {
        if self.balance == 0 {
            return Err(JarError::EmptyJar);
        }

        if amount == 0 {
            return Err(JarError::ZeroTake);
        }

        if amount > self.balance / 2 {
            return Err(JarError::ExceedsHalfBalance);
        }

        self.balance -= amount;

        Ok(WithdrawalEvent::new(by, amount))
    }

    /// Puts back an amount whose custody transfer failed after `take`
    /// already applied the state delta. Host bindings call this to keep the
    /// bookkeeping balance equal to custody.
    pub fn refund(&mut self, amount: TokenAmount) {
        self.balance += amount;
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn balance(&self) -> TokenAmount {
        self.balance
    }
}
