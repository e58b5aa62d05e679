use near_sdk::{json_types::U128, PromiseOrValue};

use crate::take_view::TakeView;

pub trait InitApi {
    fn init(message: String) -> Self;
}

/// The `DonateApi` trait defines the method for putting tokens into the jar.
pub trait DonateApi {
    /// Donates the attached deposit to the jar and replaces the jar's message.
    ///
    /// # Arguments
    ///
    /// * `message` - The new message to leave in the jar. It overwrites the
    ///   previous message wholesale.
    ///
    /// # Panics
    ///
    /// This method will panic if the attached deposit is zero. The panic
    /// reverts the call, so the deposit is returned and the jar is unchanged.
    fn donate(&mut self, message: String);
}

/// The `TakeApi` trait defines the method for taking tokens out of the jar.
pub trait TakeApi {
    /// Transfers `amount` of native tokens from the jar to the calling account.
    ///
    /// # Arguments
    ///
    /// * `amount` - The amount of tokens to take. It must be positive and must
    ///   not exceed half of the jar's current balance.
    ///
    /// # Returns
    ///
    /// A `PromiseOrValue<TakeView>` with the amount actually transferred.
    /// If the transfer itself fails, the jar is refunded and the view
    /// reports `0`.
    ///
    /// # Panics
    ///
    /// This method will panic under the following conditions:
    /// - If the jar is empty.
    /// - If `amount` is zero.
    /// - If `amount` exceeds half of the jar's current balance.
    fn take(&mut self, amount: U128) -> PromiseOrValue<TakeView>;
}

/// The `JarApi` trait defines read-only access to the jar's state.
pub trait JarApi {
    /// Returns the message left by the most recent successful donation.
    fn get_message(&self) -> String;

    /// Returns the amount of tokens the jar currently holds.
    fn get_balance(&self) -> U128;
}

pub trait InfoApi {
    fn contract_version(&self) -> String;
}
