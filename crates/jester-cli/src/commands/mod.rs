pub mod ask;
pub mod dance;
pub mod voidchain;
