//! Serde support
//!
//! A vector serializes as a plain sequence of its live elements; capacity
//! is not part of the serialized form. Deserializing yields an exact-fit
//! vector.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::storage::Vector;

impl<T: Serialize> Serialize for Vector<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.data())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Vector<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Vector::from)
    }
}
