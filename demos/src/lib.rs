pub mod app_setup_options;
pub mod scene_setup;
pub mod simulated_host;
