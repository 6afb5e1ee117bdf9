use num::Num;
use serde::de::Error as _;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::ZeroSpVec;

impl<N> Serialize for ZeroSpVec<N>
where
    N: Num + Serialize + Copy,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // fields: len, nnz, entries
        let mut state = serializer.serialize_struct("ZeroSpVec", 3)?;
        state.serialize_field("len", &(self.len as u64))?;
        state.serialize_field("nnz", &(self.nnz() as u64))?;

        // entries: ordered (index, value) pairs
        let entries: Vec<(u64, N)> = self
            .raw_iter()
            .map(|(idx, val)| (idx as u64, *val))
            .collect();
        state.serialize_field("entries", &entries)?;
        state.end()
    }
}

impl<'de, N> Deserialize<'de> for ZeroSpVec<N>
where
    N: Num + Deserialize<'de> + Copy,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ZeroSpVecData<N> {
            len: u64,
            nnz: u64,
            entries: Vec<(u64, N)>,
        }

        let data = ZeroSpVecData::deserialize(deserializer)?;
        if data.nnz as usize != data.entries.len() {
            return Err(D::Error::custom(format!(
                "nnz {} does not match {} entries",
                data.nnz,
                data.entries.len()
            )));
        }
        let entries = data
            .entries
            .into_iter()
            .map(|(index, value)| (index as usize, value))
            .collect();
        ZeroSpVec::from_entries(data.len as usize, entries).map_err(D::Error::custom)
    }
}
