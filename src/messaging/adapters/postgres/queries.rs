//! Translation of conversation lookups into SQL query fragments.

use super::schema::messages;
use crate::messaging::domain::{ListingRef, ParticipantId};
use diesel::pg::Pg;
use diesel::prelude::*;

/// Builds the thread query for one conversation: both message directions,
/// restricted to the listing, ordered by assigned identifier.
pub(crate) fn conversation_query(
    one: &ParticipantId,
    other: &ParticipantId,
    listing: &ListingRef,
) -> messages::BoxedQuery<'static, Pg> {
    let side_a = one.as_str().to_owned();
    let side_b = other.as_str().to_owned();
    messages::table
        .into_boxed()
        .filter(messages::listing_ref.eq(listing.as_str().to_owned()))
        .filter(
            messages::sender
                .eq(side_a.clone())
                .and(messages::receiver.eq(side_b.clone()))
                .or(messages::sender
                    .eq(side_b)
                    .and(messages::receiver.eq(side_a))),
        )
        .order(messages::id.asc())
}
