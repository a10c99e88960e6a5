//! Diesel schema for message log persistence.

diesel::table! {
    /// Append-only log of messages between marketplace participants.
    messages (id) {
        /// Store-assigned message identifier; assignment order is the
        /// conversation order.
        id -> BigInt,
        /// Participant who sent the message.
        #[max_length = 255]
        sender -> Varchar,
        /// Participant who received the message.
        #[max_length = 255]
        receiver -> Varchar,
        /// Listing the conversation is about.
        #[max_length = 255]
        listing_ref -> Varchar,
        /// Message text.
        body -> Text,
    }
}
