//! Askama templates for the web frontend.

use askama::Template;

/// Compass page: rotates a needle toward the nearest restroom.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate;

/// Map page: plots every catalog entry on a tile layer.
#[derive(Template)]
#[template(path = "map.html")]
pub struct MapTemplate;
