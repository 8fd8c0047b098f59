//! The turn strategy: breach bookkeeping, the throttled build queue, gap
//! and risk analysis, the fixed layout, and the orchestrator that runs
//! them in order each turn.

pub mod breach;
pub mod config;
pub mod gaps;
pub mod layout;
pub mod orchestrator;
pub mod queue;
pub mod region;
pub mod risk;

pub use breach::BreachTracker;
pub use config::StrategyConfig;
pub use gaps::GapReading;
pub use orchestrator::{Offense, Strategy, TurnContext, TurnReport};
pub use queue::{BuildOrder, BuildQueue, FlushReport};
pub use region::Region;
pub use risk::{path_risk, select_safest};
