//! Presence-tracking field type for partial updates.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One field of a partial update payload.
///
/// `Unset` means the caller did not mention the field at all and the stored value must
/// be kept. `Set` carries whatever the caller sent; for nullable fields use
/// `Patch<Option<T>>`, where `Set(None)` clears the stored value.
///
/// Fields of this type need `#[serde(default)]` so that absence decodes as `Unset`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Patch<T> {
    #[default]
    Unset,
    Set(T),
}

impl<T> Patch<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, Patch::Unset)
    }

    pub fn is_set(&self) -> bool {
        matches!(self, Patch::Set(_))
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Patch<U> {
        match self {
            Patch::Unset => Patch::Unset,
            Patch::Set(value) => Patch::Set(f(value)),
        }
    }

    /// Like `map`, for conversions that can fail.
    pub fn try_map<U, E, F: FnOnce(T) -> Result<U, E>>(self, f: F) -> Result<Patch<U>, E> {
        match self {
            Patch::Unset => Ok(Patch::Unset),
            Patch::Set(value) => f(value).map(Patch::Set),
        }
    }

    /// Returns the supplied value, or `current` when the field was not supplied.
    pub fn unwrap_or(self, current: T) -> T {
        match self {
            Patch::Unset => current,
            Patch::Set(value) => value,
        }
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    // Only called when the key is present; absence is handled by `#[serde(default)]`.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Patch::Set)
    }
}

impl<T> Serialize for Patch<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Patch::Set(value) => value.serialize(serializer),
            Patch::Unset => serializer.serialize_none(),
        }
    }
}
