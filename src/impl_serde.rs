//!
//! Support for serde implementations
//!
use crate::*;
use serde_crate::{de, ser};

use stdlib::str::FromStr;

impl ser::Serialize for BigUnsigned {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.collect_str(&self)
    }
}

/// Used by SerDe to construct a BigUnsigned
struct BigUnsignedVisitor;

impl<'de> de::Visitor<'de> for BigUnsignedVisitor {
    type Value = BigUnsigned;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a non-negative integer or string of decimal digits")
    }

    fn visit_str<E>(self, value: &str) -> Result<BigUnsigned, E>
    where
        E: de::Error,
    {
        BigUnsigned::from_str(value).map_err(E::custom)
    }

    fn visit_u64<E>(self, value: u64) -> Result<BigUnsigned, E>
    where
        E: de::Error,
    {
        Ok(BigUnsigned::from(value))
    }

    fn visit_u128<E>(self, value: u128) -> Result<BigUnsigned, E>
    where
        E: de::Error,
    {
        Ok(BigUnsigned::from(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<BigUnsigned, E>
    where
        E: de::Error,
    {
        u64::try_from(value)
            .map(BigUnsigned::from)
            .map_err(|_| E::invalid_value(de::Unexpected::Signed(value), &self))
    }
}

impl<'de> de::Deserialize<'de> for BigUnsigned {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        d.deserialize_any(BigUnsignedVisitor)
    }
}
