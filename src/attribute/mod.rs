//! Attribute block and action-scoped bonus accumulators

mod block;
mod bonus;

pub use block::AttributeBlock;
pub use bonus::{ActionBonus, AttackBonuses, BonusGroups};
