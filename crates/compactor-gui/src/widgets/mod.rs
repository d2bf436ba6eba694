/// UI widgets for Compactor.

pub mod breakdown_bar;
pub mod nav_bar;
pub mod status_bar;
