pub mod filter;
pub mod nav;
pub mod notification;
pub mod ui;
