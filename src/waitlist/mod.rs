mod intake;
mod model;
mod page;
mod state;

pub use model::{ClassTag, MembershipPlan};
pub use page::{PlanQuery, WaitlistPage};
