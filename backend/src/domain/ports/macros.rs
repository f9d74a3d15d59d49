//! Helper macro generating port error enums with snake-case constructors.
//!
//! Each variant becomes a `thiserror` variant with the given message and a
//! constructor named after the variant, e.g. `NotFound { id }` yields
//! `not_found(id)`. Field parameters accept anything `Into` the field type.

macro_rules! define_port_error {
    (@ctor $variant:ident) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]() -> Self {
                Self::$variant
            }
        }
    };

    (@ctor $variant:ident { $($field:ident : $ty:ty),* $(,)? }) => {
        define_port_error!(@ctor_impl $variant () () $( $field : $ty, )*);
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) ) => {
        ::paste::paste! {
            pub fn [<$variant:snake>]($($params)*) -> Self {
                Self::$variant { $($inits)* }
            }
        }
    };

    (@ctor_impl $variant:ident ($($params:tt)*) ($($inits:tt)*) $field:ident : $ty:ty, $($rest:tt)*) => {
        define_port_error!(
            @ctor_impl
            $variant
            ($($params)* $field: impl Into<$ty>,)
            ($($inits)* $field: $field.into(),)
            $($rest)*
        );
    };

    (
        $(#[$outer:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $( { $($field:ident : $ty:ty),* $(,)? } )? => $message:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[error($message)]
                $variant $( { $($field : $ty),* } )?,
            )*
        }

        impl $name {
            $(
                define_port_error!(@ctor $variant $( { $($field : $ty),* } )?);
            )*
        }
    };
}

pub(crate) use define_port_error;

#[cfg(test)]
mod tests {
    use crate::domain::RecordId;

    define_port_error! {
        pub enum SamplePortError {
            Missing { id: RecordId } => "missing: {id}",
            Unavailable { message: String } => "unavailable: {message}",
            Exhausted => "exhausted",
        }
    }

    #[test]
    fn field_constructors_accept_convertible_values() {
        assert_eq!(SamplePortError::missing(7_i64).to_string(), "missing: 7");
        assert_eq!(
            SamplePortError::unavailable("lock").to_string(),
            "unavailable: lock"
        );
    }

    #[test]
    fn unit_variants_get_nullary_constructors() {
        assert_eq!(SamplePortError::exhausted(), SamplePortError::Exhausted);
    }
}
