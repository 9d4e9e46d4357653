pub mod billing;
pub mod dashboard;
pub mod drafts;
pub mod inbox;
pub mod invoice;
pub mod sent;
pub mod unauthorized;
