pub mod activity;
pub mod entities;
pub mod facts;
