//! Newtype wrappers for the string identifiers that flow through a pack build.
//!
//! Both newtypes serialize as plain strings so config and manifest documents
//! keep their on-disk shape.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

macro_rules! string_newtype {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;
            fn deref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_owned())
            }
        }
    };
}

string_newtype!(
    /// Name of a material directory under the materials root (e.g. `Sky`, `RenderChunk`).
    MaterialName
);

string_newtype!(
    /// Pack identity UUID as written in the manifest header.
    PackUuid
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn material_name_display_and_deref() {
        let name = MaterialName::new("RenderChunk");
        assert_eq!(name.to_string(), "RenderChunk");
        assert_eq!(name.len(), 11);
        assert!(name.starts_with("Render"));
    }

    #[test]
    fn material_name_compares_with_str() {
        let name = MaterialName::from("Sky");
        assert_eq!(name, "Sky");
        assert!(name == *"Sky");
        assert_ne!(name, "sky");
    }

    #[test]
    fn pack_uuid_serializes_as_plain_string() {
        let uuid = PackUuid::new("5ef1a9e2-0000-4000-8000-000000000001");
        let json = serde_json::to_string(&uuid).unwrap();
        assert_eq!(json, "\"5ef1a9e2-0000-4000-8000-000000000001\"");
        let back: PackUuid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, uuid);
    }

    #[test]
    fn material_names_sort_lexically() {
        let mut names = vec![
            MaterialName::from("Sky"),
            MaterialName::from("Actor"),
            MaterialName::from("RenderChunk"),
        ];
        names.sort();
        let sorted: Vec<_> = names.iter().map(MaterialName::as_str).collect();
        assert_eq!(sorted, ["Actor", "RenderChunk", "Sky"]);
    }
}
