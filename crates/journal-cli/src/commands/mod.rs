pub mod add;
pub mod bookmark;
pub mod common;
pub mod delete;
pub mod dictate;
pub mod edit;
pub mod filter;
pub mod list;
pub mod show;
pub mod sort;
