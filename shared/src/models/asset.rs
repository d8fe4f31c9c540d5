//! Stored Asset Model

use serde::{Deserialize, Serialize};

/// Kind of a site asset held in the assets bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Logo,
    Video,
    Image,
}

impl AssetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetKind::Logo => "logo",
            AssetKind::Video => "video",
            AssetKind::Image => "image",
        }
    }

    /// Classify a stored object by its name
    ///
    /// Uploads are named by kind ("logo-001.svg", "footer-video.mp4"), so a
    /// keyword match on the name is the resolution rule.
    pub fn from_object_name(name: &str) -> AssetKind {
        let lower = name.to_lowercase();
        if lower.contains("logo") {
            AssetKind::Logo
        } else if lower.contains("video") {
            AssetKind::Video
        } else {
            AssetKind::Image
        }
    }
}

/// Object listed from the assets bucket, with its resolved public URL
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredAsset {
    pub name: String,
    pub url: String,
    pub updated_at: Option<String>,
}

impl StoredAsset {
    pub fn kind(&self) -> AssetKind {
        AssetKind::from_object_name(&self.name)
    }
}
