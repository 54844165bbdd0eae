pub use crate::dispatch::DispatchError;
