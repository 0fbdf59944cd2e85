pub const RENDER_WIDTH: i32 = 1920;           // Width of the render texture
pub const RENDER_HEIGHT: i32 = 1080;          // Height of the render texture
pub const FPS: u32 = 60;                      // Default frames per second

pub const DEFAULT_INTERVAL_MS: u64 = 7000;    // Time each slide stays active (ms)
pub const MIN_INTERVAL_MS: u64 = 5000;
pub const MAX_INTERVAL_MS: u64 = 10000;

pub const SLIDE_FIT: f32 = 0.9;               // Largest fraction of the render target a slide may cover

pub const MAX_DOTS: u64 = 64;                 // Upper bound for --dots
pub const DOT_RADIUS: f32 = 8.0;
pub const DOT_SPACING: f32 = 28.0;            // Distance between dot centres
pub const DOT_MARGIN_BOTTOM: f32 = 40.0;
