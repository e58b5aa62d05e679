#![cfg(test)]

use near_sdk::{json_types::U128, AccountId};
use penny_jar_model::{
    api::{JarApi, TakeApi},
    WithdrawalEvent,
};
use rstest::rstest;

use crate::{
    common::{
        test_data::set_test_future_success,
        testing::{
            accounts::{alice, bob},
            expect_panic, Context, TokenUtils,
        },
    },
    event::EventKind,
};

fn jar_with_one_near(donor: &AccountId) -> Context {
    let mut context = Context::new("test");
    context.donate(donor, 1.to_yocto(), "test2");
    context
}

#[rstest]
fn take_from_empty_jar_is_rejected(alice: AccountId) {
    let mut context = Context::new("test");

    context.switch_account(&alice);

    expect_panic(&context, "Jar is empty", || {
        context.contract().take(U128(1.to_yocto() / 100));
    });

    assert_eq!(context.contract().get_balance().0, 0);
    assert!(context.get_events().is_empty());
}

#[rstest]
fn take_over_half_balance_is_rejected(alice: AccountId, bob: AccountId) {
    let mut context = jar_with_one_near(&alice);

    context.switch_account(&bob);

    expect_panic(&context, "Cannot take more than half of the jar balance", || {
        context.contract().take(U128(51 * 1.to_yocto() / 100));
    });

    assert_eq!(context.contract().get_balance().0, 1.to_yocto());
    assert_eq!(context.contract().get_message(), "test2");
    assert_eq!(context.get_events().len(), 1);
}

#[rstest]
fn zero_take_is_rejected(alice: AccountId, bob: AccountId) {
    let mut context = jar_with_one_near(&alice);

    context.switch_account(&bob);

    expect_panic(&context, "Take must be positive", || {
        context.contract().take(U128(0));
    });

    assert_eq!(context.contract().get_balance().0, 1.to_yocto());
}

#[rstest]
fn take_sensible_amount(alice: AccountId, bob: AccountId) {
    let mut context = jar_with_one_near(&alice);

    let taken = context.take(&bob, 1.to_yocto() / 4);

    assert_eq!(taken.taken_amount.0, 1.to_yocto() / 4);
    assert_eq!(context.contract().get_balance().0, 3 * 1.to_yocto() / 4);
    assert_eq!(context.contract().get_message(), "test2");

    assert_eq!(
        context.get_events().last(),
        Some(&EventKind::Withdrawal(WithdrawalEvent::new(bob, 1.to_yocto() / 4)))
    );
}

#[rstest]
fn half_balance_bound_follows_current_balance(alice: AccountId, bob: AccountId) {
    let mut context = jar_with_one_near(&alice);

    context.take(&bob, 1.to_yocto() / 2);

    // Half of what started in the jar is now over the bound.
    expect_panic(&context, "Cannot take more than half of the jar balance", || {
        context.contract().take(U128(1.to_yocto() / 2));
    });

    context.take(&bob, 1.to_yocto() / 4);

    assert_eq!(context.contract().get_balance().0, 1.to_yocto() / 4);
}

#[rstest]
fn failed_transfer_refunds_the_jar(alice: AccountId, bob: AccountId) {
    let mut context = jar_with_one_near(&alice);

    set_test_future_success(false);

    let taken = context.take(&bob, 1.to_yocto() / 4);

    assert_eq!(taken.taken_amount.0, 0);
    assert_eq!(context.contract().get_balance().0, 1.to_yocto());

    // No withdrawal event: the only record is the seeding donation.
    assert_eq!(context.get_events().len(), 1);

    set_test_future_success(true);

    let taken = context.take(&bob, 1.to_yocto() / 4);

    assert_eq!(taken.taken_amount.0, 1.to_yocto() / 4);
    assert_eq!(context.contract().get_balance().0, 3 * 1.to_yocto() / 4);
    assert_eq!(context.get_events().len(), 2);
}

#[rstest]
fn any_account_may_take(alice: AccountId) {
    let mut context = jar_with_one_near(&alice);

    // Including the original donor.
    let taken = context.take(&alice, 1.to_yocto() / 10);

    assert_eq!(taken.taken_amount.0, 1.to_yocto() / 10);
}
