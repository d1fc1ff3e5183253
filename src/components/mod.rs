//! UI Components
//!
//! Thin presentation layer over the shared state manager.

mod add_panel;
mod category_select;
mod deleted_panel;
mod edit_panel;
mod inventory_table;
mod inventory_view;
mod notice_banner;
mod tab_bar;

pub use add_panel::AddPanel;
pub use category_select::CategorySelect;
pub use deleted_panel::DeletedPanel;
pub use edit_panel::EditPanel;
pub use inventory_table::InventoryTable;
pub use inventory_view::InventoryView;
pub use notice_banner::NoticeBanner;
pub use tab_bar::{ActiveTab, TabBar};
