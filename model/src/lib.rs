pub mod api;
pub mod error;
pub mod event;
pub mod ledger;
pub mod take_view;

pub use error::JarError;
pub use event::{DonationEvent, WithdrawalEvent};
pub use ledger::JarLedger;

/// Amount of native tokens in the smallest unit (yoctoNEAR).
pub type TokenAmount = u128;
