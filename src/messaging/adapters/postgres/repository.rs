//! `PostgreSQL` message store implementation.

use super::{
    models::{MessageRow, NewMessageRow},
    queries::conversation_query,
    schema::messages,
};
use crate::messaging::{
    domain::{ListingRef, Message, MessageDraft, MessageId, ParticipantId},
    ports::{MessageStore, MessageStoreError, MessageStoreResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by messaging adapters.
pub type MessagingPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed message store.
#[derive(Debug, Clone)]
pub struct PostgresMessageStore {
    pool: MessagingPgPool,
}

impl PostgresMessageStore {
    /// Creates a new store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: MessagingPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> MessageStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> MessageStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(MessageStoreError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(MessageStoreError::persistence)?
    }
}

#[async_trait]
impl MessageStore for PostgresMessageStore {
    async fn insert(&self, draft: &MessageDraft) -> MessageStoreResult<Message> {
        let new_row = NewMessageRow {
            sender: draft.sender().as_str().to_owned(),
            receiver: draft.receiver().as_str().to_owned(),
            listing_ref: draft.listing().as_str().to_owned(),
            body: draft.body().to_owned(),
        };

        self.run_blocking(move |connection| {
            let row = diesel::insert_into(messages::table)
                .values(&new_row)
                .get_result::<MessageRow>(connection)
                .map_err(MessageStoreError::persistence)?;
            row_to_message(row)
        })
        .await
    }

    async fn find_between(
        &self,
        one: &ParticipantId,
        other: &ParticipantId,
        listing: &ListingRef,
    ) -> MessageStoreResult<Vec<Message>> {
        let query = conversation_query(one, other, listing);
        self.run_blocking(move |connection| {
            let rows = query
                .select(MessageRow::as_select())
                .load::<MessageRow>(connection)
                .map_err(MessageStoreError::persistence)?;
            rows.into_iter().map(row_to_message).collect()
        })
        .await
    }

    async fn find_involving(
        &self,
        participant: &ParticipantId,
    ) -> MessageStoreResult<Vec<Message>> {
        let side = participant.as_str().to_owned();
        self.run_blocking(move |connection| {
            let rows = messages::table
                .filter(
                    messages::sender
                        .eq(side.clone())
                        .or(messages::receiver.eq(side)),
                )
                .select(MessageRow::as_select())
                .load::<MessageRow>(connection)
                .map_err(MessageStoreError::persistence)?;
            rows.into_iter().map(row_to_message).collect()
        })
        .await
    }
}

/// Converts a persisted row into the domain message.
///
/// # Errors
///
/// Returns [`MessageStoreError::InvalidRow`] when the row holds a negative
/// identifier or empty participant or listing references.
pub fn row_to_message(row: MessageRow) -> MessageStoreResult<Message> {
    let MessageRow {
        id,
        sender,
        receiver,
        listing_ref,
        body,
    } = row;
    let message_id = u64::try_from(id).map_err(MessageStoreError::invalid_row)?;
    let sender_id = ParticipantId::new(sender).map_err(MessageStoreError::invalid_row)?;
    let receiver_id = ParticipantId::new(receiver).map_err(MessageStoreError::invalid_row)?;
    let listing = ListingRef::new(listing_ref).map_err(MessageStoreError::invalid_row)?;
    Ok(Message::new(
        MessageId::new(message_id),
        MessageDraft::new(sender_id, receiver_id, listing, body),
    ))
}
