pub mod activity_state;

pub use activity_state::ActivityState;
