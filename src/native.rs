pub mod event;
pub mod handle;
pub mod impl_fake;
pub mod interface;
