pub mod icon;
pub mod separator;
pub mod sidebar;
pub mod tooltip;
