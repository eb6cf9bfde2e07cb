//! The closed icon taxonomy.
//!
//! Every icon record carries exactly one [`CategoryId`]. `Development` is the
//! fallback assigned when no rule matches.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryId {
    Containers,
    Media,
    Downloads,
    Monitoring,
    Storage,
    Networking,
    Databases,
    Development,
    Communication,
    Automation,
    Os,
    Security,
    Cloud,
    Hardware,
    Virtualization,
}

impl CategoryId {
    /// All categories in display order.
    pub const ALL: [CategoryId; 15] = [
        CategoryId::Containers,
        CategoryId::Media,
        CategoryId::Downloads,
        CategoryId::Monitoring,
        CategoryId::Storage,
        CategoryId::Networking,
        CategoryId::Databases,
        CategoryId::Development,
        CategoryId::Communication,
        CategoryId::Automation,
        CategoryId::Os,
        CategoryId::Security,
        CategoryId::Cloud,
        CategoryId::Hardware,
        CategoryId::Virtualization,
    ];

    pub const FALLBACK: CategoryId = CategoryId::Development;

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryId::Containers => "containers",
            CategoryId::Media => "media",
            CategoryId::Downloads => "downloads",
            CategoryId::Monitoring => "monitoring",
            CategoryId::Storage => "storage",
            CategoryId::Networking => "networking",
            CategoryId::Databases => "databases",
            CategoryId::Development => "development",
            CategoryId::Communication => "communication",
            CategoryId::Automation => "automation",
            CategoryId::Os => "os",
            CategoryId::Security => "security",
            CategoryId::Cloud => "cloud",
            CategoryId::Hardware => "hardware",
            CategoryId::Virtualization => "virtualization",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryId::Containers => "Containers",
            CategoryId::Media => "Media & Streaming",
            CategoryId::Downloads => "Downloads",
            CategoryId::Monitoring => "Monitoring",
            CategoryId::Storage => "Storage & Cloud",
            CategoryId::Networking => "Networking",
            CategoryId::Databases => "Databases",
            CategoryId::Development => "Development",
            CategoryId::Communication => "Communication",
            CategoryId::Automation => "Automation",
            CategoryId::Os => "Operating Systems",
            CategoryId::Security => "Security",
            CategoryId::Cloud => "Cloud Providers",
            CategoryId::Hardware => "Hardware",
            CategoryId::Virtualization => "Virtualization",
        }
    }

    /// Material Design glyph used for the category itself.
    pub fn glyph(&self) -> &'static str {
        match self {
            CategoryId::Containers => "mdi:docker",
            CategoryId::Media => "mdi:play-circle",
            CategoryId::Downloads => "mdi:download",
            CategoryId::Monitoring => "mdi:chart-line",
            CategoryId::Storage => "mdi:cloud",
            CategoryId::Networking => "mdi:network",
            CategoryId::Databases => "mdi:database",
            CategoryId::Development => "mdi:code-tags",
            CategoryId::Communication => "mdi:forum",
            CategoryId::Automation => "mdi:home-automation",
            CategoryId::Os => "mdi:desktop-tower",
            CategoryId::Security => "mdi:shield-lock",
            CategoryId::Cloud => "mdi:cloud-outline",
            CategoryId::Hardware => "mdi:chip",
            CategoryId::Virtualization => "mdi:server",
        }
    }

    pub fn order(&self) -> usize {
        Self::ALL
            .iter()
            .position(|c| c == self)
            .unwrap_or(Self::ALL.len())
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| Error::category_not_found(s))
    }
}
