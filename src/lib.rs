pub mod confirm;
pub mod model;
pub mod output;
pub mod reconcile;
pub mod remote;
