#![cfg(test)]

use std::{
    borrow::Borrow,
    panic::{catch_unwind, UnwindSafe},
    sync::{Arc, Mutex, MutexGuard},
};

use near_sdk::{
    json_types::U128, test_utils::VMContextBuilder, testing_env, AccountId, NearToken, PromiseOrValue,
};
use penny_jar_model::{
    api::{DonateApi, InitApi, TakeApi},
    take_view::TakeView,
    TokenAmount,
};

use super::test_data;
use crate::{event::EventKind, Contract};

pub mod accounts {
    use near_sdk::AccountId;
    use rstest::fixture;

    #[fixture]
    pub fn alice() -> AccountId {
        near_sdk::test_utils::test_env::alice()
    }

    #[fixture]
    pub fn bob() -> AccountId {
        near_sdk::test_utils::test_env::bob()
    }

    #[fixture]
    pub fn carol() -> AccountId {
        near_sdk::test_utils::test_env::carol()
    }
}

pub(crate) struct Context {
    contract: Arc<Mutex<Contract>>,
    pub owner: AccountId,
    builder: VMContextBuilder,
}

impl Context {
    pub(crate) fn new(initial_message: &str) -> Self {
        let owner: AccountId = "owner".to_string().try_into().unwrap();

        let mut builder = VMContextBuilder::new();
        builder
            .current_account_id(owner.clone())
            .signer_account_id(owner.clone())
            .predecessor_account_id(owner.clone())
            .block_timestamp(0);

        testing_env!(builder.build());

        let contract = Contract::init(initial_message.to_string());

        Self {
            owner,
            builder,
            contract: Arc::new(Mutex::new(contract)),
        }
    }

    pub(crate) fn contract(&self) -> MutexGuard<'_, Contract> {
        self.contract.try_lock().expect("Contract is already locked")
    }

    pub(crate) fn switch_account(&mut self, account_id: impl Borrow<AccountId>) {
        let account_id = account_id.borrow().clone();
        self.builder
            .predecessor_account_id(account_id.clone())
            .signer_account_id(account_id);
        testing_env!(self.builder.build());
    }

    pub(crate) fn set_attached_deposit(&mut self, amount: TokenAmount) {
        self.builder.attached_deposit(NearToken::from_yoctonear(amount));
        testing_env!(self.builder.build());
    }

    /// Donates on behalf of `donor` with the given attached deposit.
    pub(crate) fn donate(&mut self, donor: &AccountId, amount: TokenAmount, message: &str) {
        self.switch_account(donor);
        self.set_attached_deposit(amount);

        self.contract().donate(message.to_string());

        self.set_attached_deposit(0);
    }

    /// Takes on behalf of `taker` and unwraps the resulting view.
    pub(crate) fn take(&mut self, taker: &AccountId, amount: TokenAmount) -> TakeView {
        self.switch_account(taker);

        self.contract().take(U128(amount)).unwrap()
    }

    pub(crate) fn get_events(&self) -> Vec<EventKind> {
        test_data::get_events()
    }
}

impl AfterCatchUnwind for Context {
    fn after_catch_unwind(&self) {
        self.contract.clear_poison();
    }
}

pub trait AfterCatchUnwind {
    fn after_catch_unwind(&self);
}

impl AfterCatchUnwind for () {
    fn after_catch_unwind(&self) {}
}

pub fn expect_panic(ctx: &impl AfterCatchUnwind, msg: &str, action: impl FnOnce() + UnwindSafe) {
    let res = catch_unwind(action);

    let panic_msg = res
        .err()
        .unwrap_or_else(|| panic!("Contract didn't panic when expected to.\nExpected message: {msg}"));

    if msg.is_empty() {
        ctx.after_catch_unwind();
        return;
    }

    let panic_msg = if let Some(msg) = panic_msg.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = panic_msg.downcast_ref::<String>() {
        msg.clone()
    } else {
        panic!("Contract didn't panic with String or &str.\nExpected message: {msg}")
    };

    assert!(
        panic_msg.contains(msg),
        "Expected panic message to contain: {msg}.\nPanic message: {panic_msg}"
    );

    ctx.after_catch_unwind();
}

pub trait TokenUtils {
    fn to_yocto(&self) -> TokenAmount;
}

impl TokenUtils for u128 {
    fn to_yocto(&self) -> TokenAmount {
        self * 10u128.pow(24)
    }
}

pub trait UnwrapPromise<T> {
    fn unwrap(self) -> T;
}

impl<T> UnwrapPromise<T> for PromiseOrValue<T> {
    fn unwrap(self) -> T {
        let PromiseOrValue::Value(t) = self else {
            panic!("Failed to unwrap PromiseOrValue")
        };
        t
    }
}
