pub mod breadcrumb;
pub mod drop_option;
pub mod pagination_controls;
