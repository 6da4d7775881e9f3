pub mod delegate;

pub use delegate::execute_delegate;
