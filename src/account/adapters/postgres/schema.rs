//! Diesel schema for account persistence.

diesel::table! {
    /// Registered marketplace accounts.
    accounts (id) {
        /// Store-assigned account identifier.
        id -> BigInt,
        /// Unique login name.
        #[max_length = 255]
        username -> Varchar,
        /// Contact email address.
        #[max_length = 255]
        email -> Varchar,
    }
}
