use std::path::PathBuf;
use std::time::Duration;
use clap::Parser;
use crate::constants::*;

/// Rotates a directory of images as a login-page media carousel.
#[derive(Parser, Debug, Clone)]
#[command(name = "carousel", version, about)]
pub struct Args {
    /// Directory holding the slide images (png, jpg, jpeg, bmp, gif)
    pub directory: PathBuf,

    /// Time each slide stays active, in milliseconds
    #[arg(long, default_value_t = DEFAULT_INTERVAL_MS, value_parser = clap::value_parser!(u64).range(MIN_INTERVAL_MS..=MAX_INTERVAL_MS))]
    pub interval_ms: u64,

    /// Number of indicator dots [default: one per slide]
    #[arg(long, value_parser = clap::value_parser!(u64).range(0..=MAX_DOTS))]
    pub dots: Option<u64>,

    /// Window width
    #[arg(long, default_value_t = RENDER_WIDTH / 2)]
    pub width: i32,

    /// Window height
    #[arg(long, default_value_t = RENDER_HEIGHT / 2)]
    pub height: i32,

    /// Target frames per second
    #[arg(long, default_value_t = FPS)]
    pub fps: u32,
}

impl Args {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn dot_count(&self, slide_count: usize) -> usize {
        self.dots.map(|n| n as usize).unwrap_or(slide_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["carousel", "media"]).unwrap();
        assert_eq!(args.directory, PathBuf::from("media"));
        assert_eq!(args.interval(), Duration::from_millis(7000));
        assert_eq!(args.dot_count(4), 4);
        assert_eq!(args.width, 960);
        assert_eq!(args.height, 540);
    }

    #[test]
    fn interval_must_stay_in_range() {
        assert!(Args::try_parse_from(["carousel", "media", "--interval-ms", "4999"]).is_err());
        assert!(Args::try_parse_from(["carousel", "media", "--interval-ms", "10001"]).is_err());
        let args = Args::try_parse_from(["carousel", "media", "--interval-ms", "10000"]).unwrap();
        assert_eq!(args.interval(), Duration::from_secs(10));
    }

    #[test]
    fn dot_count_override() {
        let args = Args::try_parse_from(["carousel", "media", "--dots", "2"]).unwrap();
        assert_eq!(args.dot_count(4), 2);
    }

    #[test]
    fn dot_count_is_bounded() {
        assert!(Args::try_parse_from(["carousel", "media", "--dots", "18446744073709551615"]).is_err());
        assert!(Args::try_parse_from(["carousel", "media", "--dots", "65"]).is_err());
        let args = Args::try_parse_from(["carousel", "media", "--dots", "64"]).unwrap();
        assert_eq!(args.dot_count(3), 64);
        let args = Args::try_parse_from(["carousel", "media", "--dots", "0"]).unwrap();
        assert_eq!(args.dot_count(3), 0);
    }

    #[test]
    fn directory_is_required() {
        assert!(Args::try_parse_from(["carousel"]).is_err());
    }
}
