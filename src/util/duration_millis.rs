use serde::{Deserialize, Deserializer};
use std::time::Duration;

pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    // local files and some podcast episodes come back with a null duration
    let millis: Option<u64> = Deserialize::deserialize(deserializer)?;
    Ok(Duration::from_millis(millis.unwrap_or_default()))
}
