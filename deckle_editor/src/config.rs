use ecolor::Color32;
use emath::Pos2;
use serde::Deserialize;
use smart_default::SmartDefault;

/// Defaults applied by the element factory and the recorder
#[derive(Deserialize, SmartDefault, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EditorConfig {
    /// Where new elements are placed, relative to the slide
    #[default(Pos2::new(50.0, 50.0))]
    pub default_position: Pos2,
    #[default = "New Text"]
    pub default_text: smartstring::alias::String,
    #[default = 16.0]
    pub default_font_size: f32,
    #[default(Color32::BLACK)]
    pub default_text_color: Color32,
    /// Used when an image's natural width can't be read from its header
    #[default = 300.0]
    pub default_image_width: f32,
    /// Seconds after which a recording stops on its own
    #[default = 5.0]
    pub recording_limit: f64,
}
