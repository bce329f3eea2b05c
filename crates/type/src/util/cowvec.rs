// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 RoleDB

use std::{
	hash::{Hash, Hasher},
	ops::Deref,
	sync::Arc,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Copy-on-write vector. Clones share the underlying buffer until one of
/// them mutates, at which point the mutating side copies.
#[derive(Debug, Clone)]
pub struct CowVec<T>(Arc<Vec<T>>);

impl<T: Clone> CowVec<T> {
	pub fn new(vec: Vec<T>) -> Self {
		CowVec(Arc::new(vec))
	}

	/// Ensures unique ownership and returns a mutable reference to the
	/// inner Vec.
	pub fn make_mut(&mut self) -> &mut Vec<T> {
		Arc::make_mut(&mut self.0)
	}

	pub fn as_slice(&self) -> &[T] {
		&self.0
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn as_ptr(&self) -> *const T {
		self.0.as_ptr()
	}
}

impl<T: Clone> Default for CowVec<T> {
	fn default() -> Self {
		CowVec::new(Vec::new())
	}
}

impl<T: Clone> From<Vec<T>> for CowVec<T> {
	fn from(vec: Vec<T>) -> Self {
		CowVec::new(vec)
	}
}

impl<T> Deref for CowVec<T> {
	type Target = [T];

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl<T: PartialEq> PartialEq for CowVec<T> {
	fn eq(&self, other: &Self) -> bool {
		*self.0 == *other.0
	}
}

impl<T: Eq> Eq for CowVec<T> {}

impl<T: Hash> Hash for CowVec<T> {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.0.hash(state);
	}
}

impl<T: Serialize> Serialize for CowVec<T> {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		self.0.serialize(serializer)
	}
}

impl<'de, T: Deserialize<'de> + Clone> Deserialize<'de> for CowVec<T> {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
		Vec::deserialize(deserializer).map(CowVec::new)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_clone_shares_buffer() {
		let a = CowVec::new(vec![1u8, 2, 3]);
		let b = a.clone();
		assert_eq!(a.as_ptr(), b.as_ptr());
	}

	#[test]
	fn test_make_mut_copies_shared() {
		let a = CowVec::new(vec![1u8, 2, 3]);
		let mut b = a.clone();

		b.make_mut()[0] = 9;

		assert_ne!(a.as_ptr(), b.as_ptr());
		assert_eq!(a.as_slice(), &[1, 2, 3]);
		assert_eq!(b.as_slice(), &[9, 2, 3]);
	}

	#[test]
	fn test_make_mut_unique_in_place() {
		let mut a = CowVec::new(vec![1u8, 2, 3]);
		let ptr = a.as_ptr();
		a.make_mut()[1] = 7;
		assert_eq!(a.as_ptr(), ptr);
		assert_eq!(a.as_slice(), &[1, 7, 3]);
	}

	#[test]
	fn test_eq_by_contents() {
		let a = CowVec::new(vec![1u8, 2]);
		let b = CowVec::new(vec![1u8, 2]);
		assert_eq!(a, b);
		assert_ne!(a.as_ptr(), b.as_ptr());
	}
}
