//! Serialization implementations for Artifact and Artifacts
//!
//! An artifact is written either as a bare id string or, when it carries
//! metadata, as an object with `id` and the metadata keys beside it.

use std::collections::BTreeMap;
use std::fmt;

use serde::de::{self, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::{Artifact, Artifacts, ID_KEY};

impl Serialize for Artifact {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.metadata.is_empty() {
            return serializer.serialize_str(&self.id);
        }

        let mut state = serializer.serialize_map(Some(1 + self.metadata.len()))?;
        state.serialize_entry(ID_KEY, &self.id)?;
        for (key, value) in &self.metadata {
            state.serialize_entry(key, value)?;
        }
        state.end()
    }
}

impl<'de> Deserialize<'de> for Artifact {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ArtifactVisitor;

        impl<'de> Visitor<'de> for ArtifactVisitor {
            type Value = Artifact;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an artifact id or an object with an 'id' field")
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Artifact, E>
            where
                E: de::Error,
            {
                Ok(Artifact::new(value))
            }

            fn visit_map<M>(self, mut map: M) -> std::result::Result<Artifact, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut id: Option<String> = None;
                let mut metadata = BTreeMap::new();

                while let Some(key) = map.next_key::<String>()? {
                    if key == ID_KEY {
                        if id.is_some() {
                            return Err(de::Error::duplicate_field("id"));
                        }
                        id = Some(map.next_value()?);
                    } else {
                        let value: Value = map.next_value()?;
                        metadata.insert(key, value);
                    }
                }

                let id = id.ok_or_else(|| <M::Error as de::Error>::missing_field("id"))?;
                Ok(Artifact::with_metadata_map(id, metadata))
            }
        }

        deserializer.deserialize_any(ArtifactVisitor)
    }
}

impl Serialize for Artifacts {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for artifact in self {
            seq.serialize_element(artifact)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Artifacts {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ArtifactsVisitor;

        impl<'de> Visitor<'de> for ArtifactsVisitor {
            type Value = Artifacts;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a list of artifacts")
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Artifacts, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut artifacts = Artifacts::new();
                while let Some(artifact) = seq.next_element::<Artifact>()? {
                    artifacts.push(artifact);
                }
                Ok(artifacts)
            }
        }

        deserializer.deserialize_seq(ArtifactsVisitor)
    }
}
