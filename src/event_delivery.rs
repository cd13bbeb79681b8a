pub mod impl_direct_callback;
pub mod impl_fake;
pub mod impl_global_bus;
pub mod interface;
pub mod select;
