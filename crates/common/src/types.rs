use serde::{Deserialize, Serialize};

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Creates an identifier from its numeric value.
            pub const fn new(value: u64) -> Self {
                Self(value)
            }

            /// Returns the numeric value.
            pub const fn value(&self) -> u64 {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

numeric_id! {
    /// Unique identifier for a product in the product table.
    ///
    /// Orders hold these instead of product copies, so every order sees the
    /// current state of the product it references.
    ProductId
}

numeric_id! {
    /// Unique identifier for an order.
    OrderId
}

numeric_id! {
    /// Unique identifier for a customer.
    CustomerId
}
