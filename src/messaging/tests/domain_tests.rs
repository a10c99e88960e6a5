//! Unit tests for messaging domain types.

use crate::messaging::domain::{
    ConversationKey, ListingRef, Message, MessageDraft, MessageId, MessagingDomainError,
    ParticipantId,
};
use rstest::{fixture, rstest};

#[fixture]
fn buyer() -> ParticipantId {
    ParticipantId::new("17").expect("valid participant")
}

#[fixture]
fn seller() -> ParticipantId {
    ParticipantId::new("42").expect("valid participant")
}

#[fixture]
fn listing() -> ListingRef {
    ListingRef::new("ad-9").expect("valid listing reference")
}

#[rstest]
fn participant_id_rejects_empty_value() {
    let result = ParticipantId::new("");
    assert_eq!(result, Err(MessagingDomainError::EmptyParticipantId));
}

#[rstest]
fn listing_ref_rejects_empty_value() {
    let result = ListingRef::new("");
    assert_eq!(result, Err(MessagingDomainError::EmptyListingRef));
}

#[rstest]
fn participant_id_accepts_whitespace() {
    let participant = ParticipantId::new(" ").expect("whitespace is a legal identifier");
    assert_eq!(participant.as_str(), " ");
}

#[rstest]
fn message_id_orders_by_value() {
    assert!(MessageId::new(1) < MessageId::new(2));
    assert_eq!(MessageId::from(5), MessageId::new(5));
}

#[rstest]
fn conversation_key_ignores_participant_order(
    buyer: ParticipantId,
    seller: ParticipantId,
    listing: ListingRef,
) {
    let one = ConversationKey::between(buyer.clone(), seller.clone(), listing.clone());
    let other = ConversationKey::between(seller.clone(), buyer.clone(), listing);

    assert_eq!(one, other);
    assert_eq!(one.first(), other.first());
    assert_eq!(one.second(), other.second());
}

#[rstest]
fn conversation_key_separates_listings(buyer: ParticipantId, seller: ParticipantId) {
    let first_ad = ListingRef::new("ad-1").expect("valid listing reference");
    let second_ad = ListingRef::new("ad-2").expect("valid listing reference");

    let one = ConversationKey::between(buyer.clone(), seller.clone(), first_ad);
    let other = ConversationKey::between(buyer, seller, second_ad);

    assert_ne!(one, other);
}

#[rstest]
fn conversation_key_supports_self_conversations(buyer: ParticipantId, listing: ListingRef) {
    let key = ConversationKey::between(buyer.clone(), buyer.clone(), listing);
    assert_eq!(key.first(), &buyer);
    assert_eq!(key.second(), &buyer);
}

#[rstest]
fn counterpart_is_the_other_side(
    buyer: ParticipantId,
    seller: ParticipantId,
    listing: ListingRef,
) {
    let message = Message::new(
        MessageId::new(1),
        MessageDraft::new(buyer.clone(), seller.clone(), listing, "Is it still for sale?"),
    );

    assert_eq!(message.counterpart(&buyer), &seller);
    assert_eq!(message.counterpart(&seller), &buyer);
}

#[rstest]
fn counterpart_of_self_message_is_self(buyer: ParticipantId, listing: ListingRef) {
    let message = Message::new(
        MessageId::new(1),
        MessageDraft::new(buyer.clone(), buyer.clone(), listing, "note to self"),
    );

    assert_eq!(message.counterpart(&buyer), &buyer);
}

#[rstest]
fn reply_shares_the_conversation_key(
    buyer: ParticipantId,
    seller: ParticipantId,
    listing: ListingRef,
) {
    let question = Message::new(
        MessageId::new(1),
        MessageDraft::new(
            buyer.clone(),
            seller.clone(),
            listing.clone(),
            "Is it still for sale?",
        ),
    );
    let answer = Message::new(
        MessageId::new(2),
        MessageDraft::new(seller, buyer, listing, "It is."),
    );

    assert_eq!(question.conversation_key(), answer.conversation_key());
}

#[rstest]
fn message_preserves_empty_body(buyer: ParticipantId, seller: ParticipantId, listing: ListingRef) {
    let message = Message::new(MessageId::new(1), MessageDraft::new(buyer, seller, listing, ""));
    assert_eq!(message.body(), "");
}
