use std::{fs::File, io::{BufReader, Read, Write}, path::Path};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    config::ArtifactFormat,
    error::ArtifactError,
    recipe::RawRecipe,
    store::CorpusStore,
    utils::math::vector::ZeroSpVec,
    vectorizer::{serde::TfidfModelData, TfidfModel},
};

/// Everything the corpus store is built from, as one serializable bundle.
/// `vectors[i]` is the TF-IDF row of `records[i]`.
///
/// The model is kept in its data form and checked in `into_store`,
/// so a bad model is reported as a load error rather than a decode error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusArtifact {
    pub records: Vec<RawRecipe>,
    pub model: TfidfModelData,
    pub vectors: Vec<ZeroSpVec<f64>>,
}

impl CorpusArtifact {
    pub fn from_reader<R: Read>(reader: R, format: ArtifactFormat) -> Result<Self, ArtifactError> {
        let artifact: Self = match format {
            ArtifactFormat::Cbor => serde_cbor::from_reader(reader)?,
            ArtifactFormat::Json => serde_json::from_reader(reader)?,
        };
        Ok(artifact)
    }

    pub fn to_writer<W: Write>(
        &self,
        writer: W,
        format: ArtifactFormat,
    ) -> Result<(), ArtifactError> {
        match format {
            ArtifactFormat::Cbor => serde_cbor::to_writer(writer, self)?,
            ArtifactFormat::Json => serde_json::to_writer(writer, self)?,
        }
        Ok(())
    }

    /// Validate and build the store
    pub fn into_store(self) -> Result<CorpusStore, ArtifactError> {
        let model = TfidfModel::try_from(self.model)?;
        Ok(CorpusStore::load(self.records, model, self.vectors)?)
    }
}

/// Read an artifact from local disk and build the corpus store
pub fn load_store<P: AsRef<Path>>(
    path: P,
    format: ArtifactFormat,
) -> Result<CorpusStore, ArtifactError> {
    let path = path.as_ref();
    info!(path = %path.display(), ?format, "reading corpus artifact");
    let reader = BufReader::new(File::open(path)?);
    CorpusArtifact::from_reader(reader, format)?.into_store()
}
