//! UI Components
//!
//! Leptos components for the receipt form.

mod details_section;
mod form_actions;
mod item_row;
mod items_table;
mod notes_section;
mod print_button;
mod signature_section;
mod toast;

pub use details_section::{DeliverySection, ReceiverSection, SenderSection};
pub use form_actions::FormActions;
pub use item_row::ItemRowView;
pub use items_table::ItemsTable;
pub use notes_section::NotesSection;
pub use print_button::PrintButton;
pub use signature_section::SignatureSection;
pub use toast::ToastHost;
