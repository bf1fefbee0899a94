// This file is part of inplace-optional.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`Optional`](crate::Optional).
//!
//! - **Serialize**: like a core `Option` (`serialize_some` / `serialize_none`).
//! - **Deserialize**: from a none, unit, or some value.
//!
//! Both layers are supported; the layer is not part of the serialized form.

// Crate imports
use crate::{layer::Layer, optional::Optional};

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

impl<T: Serialize, L: Layer<T>> Serialize for Optional<T, L> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        match self.as_option() {
            Some(v) => s.serialize_some(v),
            None => s.serialize_none(),
        }
    }
}

struct OptionalVisitor<T, L>(PhantomData<(T, L)>);

impl<'de, T, L> de::Visitor<'de> for OptionalVisitor<T, L>
where
    T: Deserialize<'de>,
    L: Layer<T>,
{
    type Value = Optional<T, L>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("an optional value")
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Optional::new())
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Optional::new())
    }

    fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
        T::deserialize(d).map(Optional::from_value)
    }
}

impl<'de, T, L> Deserialize<'de> for Optional<T, L>
where
    T: Deserialize<'de>,
    L: Layer<T>,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_option(OptionalVisitor::<T, L>(PhantomData))
    }
}
