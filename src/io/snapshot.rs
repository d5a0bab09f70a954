use std::{
    fmt,
    io::{Read, Write},
};

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{MapAccess, Visitor},
    ser::SerializeMap,
};

use crate::{
    common::{error::Result, money::Money},
    domain::donor::Donor,
};

/// Snapshot entries, kept in file order.
struct SnapshotEntries(Vec<(String, Vec<Money>)>);

impl<'de> Deserialize<'de> for SnapshotEntries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct EntriesVisitor;

        impl<'de> Visitor<'de> for EntriesVisitor {
            type Value = SnapshotEntries;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object mapping donor names to lists of amounts")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut map: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, donations)) = map.next_entry::<String, Vec<Money>>()? {
                    entries.push((name, donations));
                }
                Ok(SnapshotEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor)
    }
}

/// Borrowed view of the donors being written, serialized as one JSON object.
struct SnapshotRef<'a>(&'a [Donor]);

impl Serialize for SnapshotRef<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for donor in self.0 {
            map.serialize_entry(donor.name(), donor.donations())?;
        }
        map.end()
    }
}

/// Reads donors from a JSON snapshot.
///
/// The snapshot is an object whose keys are donor names and whose values are
/// the raw donation amounts in the order they were made. Donors come back in
/// file order; repeated names are returned as-is and resolved by the caller.
///
/// # Errors
///
/// `AppError::Snapshot` for malformed JSON or non-numeric amounts,
/// `AppError::InvalidAmount` for negative amounts and for a donor whose
/// amounts add up past what `Money` can hold.
///
/// # Examples
///
/// ```
/// use mailroom::io::snapshot::read_snapshot;
///
/// let data = r#"{"Alice": [100, 200], "Bob": [50.5]}"#;
/// let donors = read_snapshot(data.as_bytes()).unwrap();
///
/// assert_eq!(donors.len(), 2);
/// assert_eq!(donors[0].name(), "Alice");
/// assert_eq!(donors[1].donations()[0].to_string_2dp(), "50.50");
/// ```
pub fn read_snapshot<R: Read>(reader: R) -> Result<Vec<Donor>> {
    let SnapshotEntries(entries) = serde_json::from_reader(reader)?;
    entries
        .into_iter()
        .map(|(name, donations)| Donor::with_donations(name, donations))
        .collect()
}

/// Writes donors as a JSON snapshot, keys in the order given.
pub fn write_snapshot<W: Write>(mut writer: W, donors: &[Donor]) -> Result<()> {
    serde_json::to_writer(&mut writer, &SnapshotRef(donors))?;
    writer.flush()?;
    Ok(())
}
