//! UI components.

pub mod collection_card;
pub mod collections_list;
pub mod dialog_component;
pub mod dialogs;
pub mod status_bar;
pub mod toast;

pub use collections_list::CollectionsList;
pub use dialog_component::DialogComponent;
pub use status_bar::StatusBar;
pub use toast::ToastStack;
