//! Declarative macro for closed scoring taxonomies.
//!
//! **`define_dimension!`** generates a fieldless enum together with its
//! `Dimension` implementation, `Display`, and serde names, so the declared
//! variant order, the `ALL` table and the labels can never drift apart.
//!
//! # Usage
//!
//! ```ignore
//! define_dimension! {
//!     /// Primary motivators.
//!     Motivator, "Motivadores" {
//!         Purpose => "Purpose",
//!         Autonomy => "Autonomy",
//!     }
//! }
//! ```

macro_rules! define_dimension {
    (
        $(#[$meta:meta])*
        $name:ident, $taxonomy:literal {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize,
        )]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $crate::domain::narrative::Dimension for $name {
            const TAXONOMY: &'static str = $taxonomy;
            const ALL: &'static [Self] = &[$($name::$variant),+];

            fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            fn index(&self) -> usize {
                *self as usize
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.pad($crate::domain::narrative::Dimension::label(self))
            }
        }
    };
}

pub(crate) use define_dimension;
