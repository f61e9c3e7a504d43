// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Serde support, behind the `serde` feature.
//!
//! A valid value serializes as the bare integer and a poisoned one as `none`
//! (`null` in JSON), so the wire form is exactly `Option<T>`. Deserializing
//! reverses it: a missing value comes back poisoned.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::integer::Integer;
use super::integral::SafeIntegral;

impl<T> Serialize for SafeIntegral<T>
where
    T: Integer + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.checked().serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for SafeIntegral<T>
where
    T: Integer + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<T>::deserialize(deserializer)?;
        Ok(value.map_or_else(SafeIntegral::failure, SafeIntegral::new))
    }
}
