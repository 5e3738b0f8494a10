use std::fmt;

use anyhow::anyhow;
use serde_json::{Map, Value};

/// Parsed model answer: section name to section record, iterated in arrival
/// order (serde_json is built with `preserve_order`). Section records are
/// free-form; the model decides which attributes each section carries.
pub type TechStackRecommendation = Map<String, Value>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoftwareType {
    WebApp,
    HybridApp,
    AndroidApp,
    IosApp,
    DesktopApp,
}

pub const SOFTWARE_TYPE_CHOICES: &[SoftwareType] = &[
    SoftwareType::WebApp,
    SoftwareType::HybridApp,
    SoftwareType::AndroidApp,
    SoftwareType::IosApp,
    SoftwareType::DesktopApp,
];

impl SoftwareType {
    /// Human-readable label, as shown in the selection menu.
    pub fn label(self) -> &'static str {
        match self {
            SoftwareType::WebApp => "Web App",
            SoftwareType::HybridApp => "Hybrid App",
            SoftwareType::AndroidApp => "Android App",
            SoftwareType::IosApp => "iOS App",
            SoftwareType::DesktopApp => "Desktop App",
        }
    }
}

impl fmt::Display for SoftwareType {
    /// The normalized token embedded in the prompt.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SoftwareType::WebApp => write!(f, "web_app"),
            SoftwareType::HybridApp => write!(f, "hybrid_app"),
            SoftwareType::AndroidApp => write!(f, "android_app"),
            SoftwareType::IosApp => write!(f, "ios_app"),
            SoftwareType::DesktopApp => write!(f, "desktop_app"),
        }
    }
}

impl std::str::FromStr for SoftwareType {
    type Err = anyhow::Error;

    /// Accepts tokens ("web_app") and labels ("Web App") case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "web_app" => Ok(SoftwareType::WebApp),
            "hybrid_app" => Ok(SoftwareType::HybridApp),
            "android_app" => Ok(SoftwareType::AndroidApp),
            "ios_app" => Ok(SoftwareType::IosApp),
            "desktop_app" => Ok(SoftwareType::DesktopApp),
            other => Err(anyhow!(
                "Unknown software type '{other}'. Choose one of: web_app, hybrid_app, android_app, ios_app, desktop_app"
            )),
        }
    }
}
