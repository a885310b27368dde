use std::path::Path;

use anyhow::Context;
use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};
use oas3::Spec;

/// On-disk serialization of an API description, decided by file extension.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpecFormat {
  #[default]
  Json,
  Yaml,
}

impl SpecFormat {
  fn from_extension(path: &Path) -> Self {
    match path.extension().and_then(|ext| ext.to_str()) {
      Some("yaml" | "yml") => Self::Yaml,
      _ => Self::Json,
    }
  }
}

/// Memory-maps an API description and parses it without copying the file
/// into an intermediate string for the JSON case.
pub struct SpecLoader {
  file: AsyncMmapFile,
  format: SpecFormat,
}

impl SpecLoader {
  pub async fn open(path: &Path) -> anyhow::Result<Self> {
    let file = AsyncMmapFile::open(path)
      .await
      .with_context(|| format!("opening API description {}", path.display()))?;
    Ok(Self {
      file,
      format: SpecFormat::from_extension(path),
    })
  }

  pub fn parse(&self) -> anyhow::Result<Spec> {
    let spec = match self.format {
      SpecFormat::Json => serde_json::from_slice::<Spec>(self.file.as_slice())
        .context("parsing JSON API description")?,
      SpecFormat::Yaml => {
        let text = std::str::from_utf8(self.file.as_slice())
          .context("API description is not valid UTF-8")?;
        oas3::from_yaml(text).context("parsing YAML API description")?
      }
    };
    Ok(spec)
  }
}
