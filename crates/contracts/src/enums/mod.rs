pub mod condition_type;

pub use condition_type::ConditionType;
