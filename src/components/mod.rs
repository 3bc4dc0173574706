//! UI Components
//!
//! Leptos components for the list board, code bar and exchange bar.

mod keys;
mod delete_confirm_button;
mod item_form;
mod list_card;
mod list_board;
mod code_bar;
mod exchange_bar;

pub use delete_confirm_button::DeleteConfirmButton;
pub use item_form::ItemForm;
pub use list_card::ListCard;
pub use list_board::ListBoard;
pub use code_bar::CodeBar;
pub use exchange_bar::ExchangeBar;
