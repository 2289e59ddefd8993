pub mod collection;
pub mod task;

pub use collection::Entity as Collection;
pub use task::Entity as Task;
