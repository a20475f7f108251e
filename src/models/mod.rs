pub mod item_stats;
pub mod month;
pub mod sale;

pub use item_stats::ItemStats;
pub use month::MonthKey;
pub use sale::Sale;
