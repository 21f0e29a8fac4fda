pub mod context;
pub mod model;
pub mod sidebar;
pub mod status;
pub mod store;
pub mod view;
