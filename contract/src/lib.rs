use near_sdk::{near, PanicOnDefault};
use penny_jar_model::{api::InitApi, JarLedger};

mod common;
mod donate;
mod event;
mod info;
mod take;
mod view;

pub const PACKAGE_NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[near(contract_state)]
#[derive(PanicOnDefault)]
/// The `Contract` struct binds the jar ledger to the NEAR runtime. It holds
/// the donated tokens in its own account balance and keeps the ledger's
/// bookkeeping equal to that custody.
pub struct Contract {
    /// The jar's state: the held balance and the latest donor's message.
    pub ledger: JarLedger,
}

#[near]
impl InitApi for Contract {
    #[init]
    #[private]
    fn init(message: String) -> Self {
        Self {
            ledger: JarLedger::new(message),
        }
    }
}
