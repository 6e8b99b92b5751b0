//! Configuration for the level tools.

mod plot_config;

pub use plot_config::{PlotConfig, DEFAULT_PALETTE};
