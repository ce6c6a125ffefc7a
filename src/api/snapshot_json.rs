use serde::Serialize;
use serde_json::Value;

use crate::error::{CarouselError, CarouselResult};
use crate::render::Renderer;

use super::{CarouselConfig, CarouselEngine, CarouselSnapshot};

pub const CAROUSEL_SNAPSHOT_SCHEMA_VERSION: u64 = 1;

const SCHEMA_VERSION_KEY: &str = "schema_version";
const SNAPSHOT_KEY: &str = "snapshot";

#[derive(Serialize)]
struct VersionedSnapshot<'a> {
    schema_version: u64,
    snapshot: &'a CarouselSnapshot,
}

impl CarouselSnapshot {
    /// Pretty JSON wrapped as `{ "schema_version": 1, "snapshot": { .. } }`.
    pub fn to_versioned_json_pretty(&self) -> CarouselResult<String> {
        serde_json::to_string_pretty(&VersionedSnapshot {
            schema_version: CAROUSEL_SNAPSHOT_SCHEMA_VERSION,
            snapshot: self,
        })
        .map_err(|e| CarouselError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }

    /// Parses either the versioned wrapper or a bare snapshot object.
    ///
    /// A payload carrying `schema_version` is treated as wrapped; any version
    /// other than the current one is rejected rather than guessed at.
    pub fn from_json_str(input: &str) -> CarouselResult<Self> {
        let mut value: Value = serde_json::from_str(input)
            .map_err(|e| CarouselError::InvalidData(format!("snapshot is not valid json: {e}")))?;

        let version = value
            .get(SCHEMA_VERSION_KEY)
            .map(|version| {
                version.as_u64().ok_or_else(|| {
                    CarouselError::InvalidData(format!("`{SCHEMA_VERSION_KEY}` must be an integer"))
                })
            })
            .transpose()?;

        let payload = match version {
            None => value,
            Some(CAROUSEL_SNAPSHOT_SCHEMA_VERSION) => value
                .get_mut(SNAPSHOT_KEY)
                .map(Value::take)
                .ok_or_else(|| {
                    CarouselError::InvalidData(format!(
                        "versioned payload is missing `{SNAPSHOT_KEY}`"
                    ))
                })?,
            Some(version) => {
                return Err(CarouselError::InvalidData(format!(
                    "unsupported snapshot schema version: {version}"
                )));
            }
        };

        serde_json::from_value(payload)
            .map_err(|e| CarouselError::InvalidData(format!("malformed snapshot: {e}")))
    }
}

impl CarouselConfig {
    pub fn from_json_str(input: &str) -> CarouselResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            CarouselError::InvalidConfiguration(format!("failed to parse carousel config: {e}"))
        })
    }

    pub fn to_json_pretty(&self) -> CarouselResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            CarouselError::InvalidData(format!("failed to serialize carousel config: {e}"))
        })
    }
}

impl<R: Renderer> CarouselEngine<R> {
    pub fn snapshot_json_pretty(&self) -> CarouselResult<String> {
        self.snapshot().to_versioned_json_pretty()
    }
}
