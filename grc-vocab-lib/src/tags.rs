// Shared machinery for the closed tag vocabularies (category, feature and
// morphological class).

use std::collections::HashMap;

use thiserror::Error;

/// A raw analyzer token that is not part of the relevant vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagError {
    #[error("unknown part of speech code: '{0}'")]
    UnknownCategory(String),
    #[error("unknown morphological feature: '{0}'")]
    UnknownFeature(String),
    #[error("unknown morphological class: '{0}'")]
    UnknownMorphClass(String),
}

impl TagError {
    /// The offending raw token, exactly as it appeared in the analysis.
    pub fn token(&self) -> &str {
        match self {
            TagError::UnknownCategory(t)
            | TagError::UnknownFeature(t)
            | TagError::UnknownMorphClass(t) => t,
        }
    }
}

/// Declare a tag enum together with its canonical analyzer spelling.
///
/// Generates the enum, an `ALL` table of `(spelling, tag)` pairs for building
/// lookup maps, `as_str()` and a `Display` impl printing the spelling.
macro_rules! tag_vocabulary {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $variant:ident => $raw:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $( $variant, )+
        }

        impl $name {
            /// Every tag paired with its canonical analyzer spelling.
            pub const ALL: &'static [(&'static str, $name)] = &[
                $( ($raw, $name::$variant), )+
            ];

            /// Canonical analyzer spelling.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $raw, )+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(crate) use tag_vocabulary;

/// Build the string → tag map for one vocabulary. Aliases are alternate
/// spellings resolving to an existing tag.
pub(crate) fn build_table<T: Copy>(
    canonical: &[(&'static str, T)],
    aliases: &[(&'static str, T)],
) -> HashMap<&'static str, T> {
    canonical.iter().chain(aliases).copied().collect()
}
