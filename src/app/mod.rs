pub mod bootstrap;
pub mod controller;
pub mod state;
