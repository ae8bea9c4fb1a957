// Serde support for state buffers longer than serde's built-in array impls.
// Buffers are written as fixed-length tuples.

use core::fmt;
use core::marker::PhantomData;
use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::ser::{SerializeTuple, Serializer};
use serde::{Deserialize, Serialize};

pub fn serialize<S, W, const N: usize>(words: &[W; N], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    W: Serialize,
{
    let mut tuple = serializer.serialize_tuple(N)?;
    for word in words.iter() {
        tuple.serialize_element(word)?;
    }
    tuple.end()
}

struct WordsVisitor<W, const N: usize>(PhantomData<W>);

impl<'de, W, const N: usize> Visitor<'de> for WordsVisitor<W, N>
where
    W: Deserialize<'de> + Copy + Default,
{
    type Value = [W; N];

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "an array of {} words", N)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<[W; N], A::Error> {
        let mut words = [W::default(); N];
        for (i, word) in words.iter_mut().enumerate() {
            *word = seq.next_element()?.ok_or_else(|| de::Error::invalid_length(i, &self))?;
        }
        Ok(words)
    }
}

pub fn deserialize<'de, D, W, const N: usize>(deserializer: D) -> Result<[W; N], D::Error>
where
    D: Deserializer<'de>,
    W: Deserialize<'de> + Copy + Default,
{
    deserializer.deserialize_tuple(N, WordsVisitor(PhantomData))
}
