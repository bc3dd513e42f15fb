pub mod history_state;
pub mod selection_order;
pub mod weight;
pub mod weight_breakdown;

pub use history_state::HistoryState;
pub use selection_order::SelectionOrder;
pub use weight::Weight;
pub use weight_breakdown::WeightBreakdown;
