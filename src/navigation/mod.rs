pub mod sidebar_items;
pub mod variant;
