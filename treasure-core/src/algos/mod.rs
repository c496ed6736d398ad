mod map_builder;
mod map_drawer;

pub(crate) use map_builder::MapBuilder;
pub use map_builder::{MapBuilderConfig, MapRequest, hint_content};
pub(crate) use map_drawer::{DrawConfig, ListDrawer, MapDrawer, SvgGridDrawer};

pub(crate) struct RngHandler;

impl RngHandler {
    pub fn rng() -> impl rand::Rng {
        rand::rng()
    }
}
