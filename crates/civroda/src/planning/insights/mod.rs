//! Council-level context derived from the record pool: statistics, risk drivers and
//! recurring condition themes.

pub mod risk;
pub mod stats;
pub mod themes;

pub use risk::{risk_drivers, RiskDriver, RiskLevel, RiskProfile};
pub use stats::{council_stats, portfolio_stats, CouncilStats, PortfolioStats};
pub use themes::{consent_condition_themes, council_themes, refusal_themes, CouncilThemes};
