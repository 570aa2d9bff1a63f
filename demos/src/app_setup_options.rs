use bevy::prelude::*;
use bowling_ar::SceneAssetSource;
use clap::Parser;

#[derive(Resource, Debug, Parser, Clone)]
#[command(about = "Place bowling pins on a detected plane and swipe the ball at them")]
pub struct AppSetupConfiguration {
    /// glTF file (relative to the assets folder) with nodes named "pin" and "ball". Primitive
    /// shapes are used when omitted.
    #[arg(long = "asset")]
    pub asset: Option<String>,
    /// Seconds until the simulated host reports a plane.
    #[arg(long = "anchor-delay", default_value_t = 2.0)]
    pub anchor_delay: f32,
    /// Height of the reported plane.
    #[arg(long = "anchor-height", default_value_t = 0.0, allow_negative_numbers = true)]
    pub anchor_height: f32,
    /// How many pins to place before placing the ball.
    #[arg(long = "pin-limit", default_value_t = 5)]
    pub pin_limit: usize,
    #[arg(long = "show-planes")]
    pub show_planes: bool,
    /// Log frame time and FPS.
    #[arg(long = "show-statistics")]
    pub show_statistics: bool,
    /// Draw the colliders.
    #[arg(long = "debug-physics")]
    pub debug_physics: bool,
}

impl AppSetupConfiguration {
    pub fn from_environment() -> Self {
        Self::parse()
    }

    pub fn scene_asset_source(&self) -> SceneAssetSource {
        match self.asset.as_ref() {
            Some(path) => SceneAssetSource::Gltf(path.clone()),
            None => SceneAssetSource::Procedural,
        }
    }
}
