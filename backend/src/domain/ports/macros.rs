//! Helper macro generating port error enums with snake_case constructors.
//!
//! Every variant is struct-like; each field becomes an `impl Into<T>`
//! parameter of the generated constructor, so adapters can write
//! `UserPersistenceError::query("boom")`.

macro_rules! define_port_error {
    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident { $($field:ident : $ty:ty),+ $(,)? } => $message:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant { $($field: $ty),+ },
            )+
        }

        impl $name {
            $(
                ::paste::paste! {
                    #[doc = "Construct the `" $variant "` variant."]
                    pub fn [<$variant:snake>]($($field: impl Into<$ty>),+) -> Self {
                        Self::$variant { $($field: $field.into()),+ }
                    }
                }
            )+
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    define_port_error! {
        pub enum SeedingStoreError {
            Unavailable { message: String } => "store unavailable: {message}",
            Rejected { table: String, rows: u32 } => "{table} rejected {rows} rows",
        }
    }

    #[test]
    fn constructors_accept_borrowed_strings() {
        let err = SeedingStoreError::unavailable("pool exhausted");
        assert_eq!(err.to_string(), "store unavailable: pool exhausted");
    }

    #[test]
    fn constructors_support_multiple_fields() {
        let err = SeedingStoreError::rejected("address", 2_u32);
        assert_eq!(err.to_string(), "address rejected 2 rows");
    }
}
