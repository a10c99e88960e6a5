//! Diesel schema for catalogue persistence.

diesel::table! {
    /// Published catalogue listings.
    listings (id) {
        /// Store-assigned listing identifier; assignment order is the
        /// catalogue order.
        id -> BigInt,
        /// Owning account identifier.
        owner_id -> BigInt,
        /// Owning account username, denormalised for owner lookups.
        #[max_length = 255]
        owner_username -> Varchar,
        /// Listing title.
        #[max_length = 255]
        title -> Varchar,
        /// Asking price in the site currency's smallest advertised unit.
        price -> BigInt,
        /// Category label, empty when none was given.
        #[max_length = 255]
        category -> Varchar,
        /// Seller's location, empty when none was given.
        #[max_length = 255]
        location -> Varchar,
        /// Model year text, empty when none was given.
        #[max_length = 255]
        year -> Varchar,
        /// Mileage text, empty when none was given.
        #[max_length = 255]
        mileage -> Varchar,
        /// Free-text description.
        description -> Text,
        /// Public path of the uploaded image, if any.
        #[max_length = 512]
        image_path -> Nullable<Varchar>,
    }
}
