pub mod calendar;
pub mod navigation;
pub mod storage;
pub mod time;
