use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four fixed assessment dimensions. The set is static
/// configuration; dimensions are never created or destroyed at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    EnablingEnvironment,
    EcosystemInfrastructure,
    FinanceProviders,
    FinanceSeekers,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [
        Dimension::EnablingEnvironment,
        Dimension::EcosystemInfrastructure,
        Dimension::FinanceProviders,
        Dimension::FinanceSeekers,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Dimension::EnablingEnvironment => "Enabling Environment",
            Dimension::EcosystemInfrastructure => "Ecosystem Infrastructure",
            Dimension::FinanceProviders => "Finance Providers",
            Dimension::FinanceSeekers => "Finance Seekers",
        }
    }

    /// Stable identifier used as the table key in assessment files.
    pub fn id(&self) -> &'static str {
        match self {
            Dimension::EnablingEnvironment => "enabling_environment",
            Dimension::EcosystemInfrastructure => "ecosystem_infrastructure",
            Dimension::FinanceProviders => "finance_providers",
            Dimension::FinanceSeekers => "finance_seekers",
        }
    }

    pub fn from_id(id: &str) -> Option<Dimension> {
        Dimension::ALL
            .into_iter()
            .find(|dimension| dimension.id() == id)
    }

    /// Ordered yes/no sub-indicator questions owned by this dimension.
    /// One point per satisfied indicator in manual scoring.
    pub fn indicators(&self) -> &'static [&'static str] {
        match self {
            Dimension::EnablingEnvironment => &[
                "A national climate finance strategy has been adopted",
                "Climate-related fiscal or regulatory incentives are in force",
                "A dedicated coordination body for climate finance exists",
                "Climate risk disclosure requirements are enforced",
            ],
            Dimension::EcosystemInfrastructure => &[
                "Project preparation facilities are available",
                "Climate data and MRV systems are operational",
                "Nationally accredited implementing entities exist",
                "Market platforms connect projects to capital",
            ],
            Dimension::FinanceProviders => &[
                "Domestic banks offer climate-aligned products",
                "Institutional investors are active in climate assets",
                "Blended finance instruments are in use",
                "Local currency climate lending is available",
            ],
            Dimension::FinanceSeekers => &[
                "A pipeline of bankable climate projects exists",
                "Project developers have climate finance capacity",
                "SMEs are able to access climate funds",
                "Technical assistance for proposal development is available",
            ],
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
