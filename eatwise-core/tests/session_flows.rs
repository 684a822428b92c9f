//! End-to-end session scenarios across the auth, points, and rewards
//! surfaces, mirroring what the UI event handlers do.

use eatwise_core::{
    Account, AuthError, AuthStore, PointsLedger, ProfilePatch, Role, claim_bonus, redeem,
};

#[test]
fn register_login_cycle_with_duplicate_email() {
    let mut store = AuthStore::default();

    let identity = store
        .register(Account::new("Asha", "asha@x.com", "pw123", Role::EndUser))
        .expect("registration succeeds");
    assert_eq!(identity.name, "Asha");
    assert_eq!(identity.email, "asha@x.com");
    assert_eq!(identity.role, Role::EndUser);

    // Case-insensitive duplicate is rejected and the roster is unchanged.
    let roster = store.accounts().to_vec();
    assert_eq!(
        store
            .register(Account::new("Asha", "ASHA@X.COM", "pw123", Role::EndUser))
            .unwrap_err(),
        AuthError::DuplicateEmail
    );
    assert_eq!(store.accounts(), roster.as_slice());

    // Logging out and back in with the registered credentials works.
    store.logout();
    assert!(store.session().is_none());
    let identity = store.login("asha@x.com", "pw123").unwrap();
    assert_eq!(identity.role, Role::EndUser);
}

#[test]
fn fresh_session_claim_reward_scenario() {
    let mut ledger = PointsLedger::default();
    assert_eq!(ledger.balance(), 1850);
    claim_bonus(&mut ledger, "daily-checkin").unwrap();
    assert_eq!(ledger.balance(), 1900);
}

#[test]
fn redeem_down_to_floor_then_fail() {
    let mut ledger = PointsLedger::default();
    redeem(&mut ledger, "oil-dispenser").unwrap();
    assert_eq!(ledger.balance(), 350);
    assert!(redeem(&mut ledger, "discount-coupon").is_err());
    // A raw deduct larger than the balance still floors at zero.
    ledger.deduct(10_000);
    assert_eq!(ledger.balance(), 0);
}

#[test]
fn profile_divergence_survives_until_logout() {
    let mut store = AuthStore::default();
    store
        .login("priya.partner@example.com", "partner123")
        .unwrap();
    store.update_profile(ProfilePatch {
        name: Some("Priya S.".into()),
        location: Some("Pune".into()),
        ..ProfilePatch::default()
    });
    let profile = store.profile().unwrap();
    assert_eq!(profile.name, "Priya S.");
    assert_eq!(store.session().unwrap().name, "Priya Sharma");

    store.logout();
    assert!(store.profile().is_none());
}

#[test]
fn demo_roles_land_on_expected_roles() {
    let mut store = AuthStore::default();
    let partner = store
        .login("priya.partner@example.com", "partner123")
        .unwrap();
    assert_eq!(partner.role, Role::Partner);
    let policy = store
        .login("sanjay.policy@example.com", "policy123")
        .unwrap();
    assert_eq!(policy.role, Role::PolicyMaker);
}
