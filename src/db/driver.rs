use anyhow::Result;
use bincode::{
    config::{BigEndian, WithOtherEndian},
    DefaultOptions, Options,
};
use serde::{de::DeserializeOwned, Serialize};
use sled::Db as Sled;

pub struct Db {
    handle: Sled,
    encoder: WithOtherEndian<DefaultOptions, BigEndian>,
}
impl Db {
    // temporary tree, deleted when the handle is dropped
    pub fn new() -> Result<Self> {
        let handle = sled::Config::new().temporary(true).open()?;
        let encoder = bincode::options().with_big_endian();
        Ok(Self { handle, encoder })
    }

    pub fn next_id(&self) -> Result<u64> {
        Ok(self.handle.generate_id()?)
    }

    pub fn insert<T: Serialize, K: AsRef<[u8]>>(&self, key: K, value: &T) -> Result<()> {
        let bytes = self.encoder.serialize(value)?;
        self.handle.insert(key.as_ref(), bytes)?;
        Ok(())
    }

    pub fn get<T: DeserializeOwned, K: AsRef<[u8]>>(&self, key: K) -> Result<Option<T>> {
        self.handle
            .get(key.as_ref())?
            .map(|bytes| self.decode(&bytes))
            .transpose()
    }

    // removing an absent key is not an error
    pub fn remove<K: AsRef<[u8]>>(&self, key: K) -> Result<()> {
        self.handle.remove(key.as_ref())?;
        Ok(())
    }

    /// Entries whose key starts with `prefix`, in key byte order.
    pub fn iter_prefix<'a, T: DeserializeOwned + 'a, P: AsRef<[u8]>>(
        &'a self,
        prefix: P,
    ) -> Result<impl Iterator<Item = Result<(Vec<u8>, T)>> + 'a> {
        let entries = self.handle.scan_prefix(prefix.as_ref()).map(move |entry| {
            let (key, bytes) = entry?;
            Ok((key.to_vec(), self.decode(&bytes)?))
        });
        Ok(entries)
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T> {
        Ok(self.encoder.deserialize(bytes)?)
    }
}

impl std::fmt::Debug for Db {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Db")
            .field("entries", &self.handle.len())
            .finish_non_exhaustive()
    }
}
