mod common;

use common::create_test_marketplace;
use souk_core::{
    wizard::{GroupPatch, GroupStep, ListingPatch, ListingStep},
    Condition, WizardState,
};

#[test]
fn test_listing_photos_gate() {
    let (_temp_dir, marketplace) = create_test_marketplace();
    let mut flow = marketplace.listing_wizard().unwrap();

    flow.update(ListingPatch::default().photos(Vec::<String>::new()));
    assert!(!flow.advance());
    assert_eq!(flow.current(), WizardState::At(ListingStep::Photos));
    assert_eq!(flow.blocker().as_deref(), Some("add at least one photo"));

    flow.update(ListingPatch::default().photos(["a"]));
    assert!(flow.advance());
    assert_eq!(flow.current(), WizardState::At(ListingStep::Details));
}

#[test]
fn test_listing_full_run_and_reset() {
    let (_temp_dir, marketplace) = create_test_marketplace();
    let mut flow = marketplace.listing_wizard().unwrap();

    flow.update(ListingPatch::default().add_photo("cover.jpg").add_photo("side.jpg"));
    assert!(flow.advance());

    // Details gate holds until every required field is set
    flow.update(ListingPatch::default().title("Tablet"));
    assert!(!flow.advance());
    flow.update(ListingPatch::default().price("199.5").category("electronics"));
    flow.update(ListingPatch::default().condition(Condition::Fair));
    assert!(flow.advance());
    assert_eq!(flow.current(), WizardState::At(ListingStep::Review));

    // Retreat is never gated and the draft survives it
    assert!(flow.retreat());
    assert!(flow.retreat());
    assert_eq!(flow.current(), WizardState::At(ListingStep::Photos));
    assert_eq!(flow.draft().title, "Tablet");
    assert!(flow.advance());
    assert!(flow.advance());

    let mut records = Vec::new();
    assert!(flow.submit_to(|listing| records.push(listing)));
    assert_eq!(records.len(), 1);
    assert_eq!(flow.current(), WizardState::Submitted);

    let listing = &records[0];
    assert_eq!(listing.product.price, 199.5);
    assert_eq!(listing.product.image, "cover.jpg");
    assert_eq!(listing.product.seller.name, "Test Seller");
    assert_eq!(listing.condition, Condition::Fair);
    assert!(listing.description.is_none());

    // A second submit emits nothing
    assert!(flow.submit().is_none());

    flow.reset();
    assert_eq!(flow.current(), WizardState::At(ListingStep::Photos));
    assert!(flow.draft().photos.is_empty());
    assert!(flow.draft().title.is_empty());
}

#[test]
fn test_group_scenario() {
    let (_temp_dir, marketplace) = create_test_marketplace();
    let mut flow = marketplace.group_wizard().unwrap();

    flow.update(GroupPatch::default().selected_members(["u1", "u2"]));
    assert!(flow.advance());
    assert_eq!(flow.current(), WizardState::At(GroupStep::Name));

    flow.update(GroupPatch::default().name("Trip"));
    let group = flow.submit().expect("group should be created");
    assert_eq!(group.name, "Trip");
    assert_eq!(group.member_ids, ["u1", "u2"]);
    assert_eq!(flow.current(), WizardState::Submitted);
}

#[test]
fn test_group_wizard_gate_rejects_group_chats() {
    let (_temp_dir, marketplace) = create_test_marketplace();
    let mut flow = marketplace.group_wizard().unwrap();
    assert_eq!(flow.spec().contacts().len(), 2);

    flow.update(GroupPatch::default().toggle_member("g1"));
    assert!(!flow.advance());
    assert_eq!(flow.current(), WizardState::At(GroupStep::Select));
    assert_eq!(
        flow.blocker().as_deref(),
        Some("'g1' is not a direct contact")
    );

    flow.update(GroupPatch::default().toggle_member("g1"));
    flow.update(GroupPatch::default().toggle_member("u2"));
    assert!(flow.advance());
    assert_eq!(flow.draft().selected_members, ["u2"]);
}
