pub use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
pub use chrono_tz::Tz;
pub use csv::ReaderBuilder;
pub use flexi_logger::{
    Age, Cleanup, Criterion, DeferredNow, Duplicate, FileSpec, Logger, Naming, Record,
};
pub use image::{ImageBuffer, ImageFormat, RgbImage};
pub use once_cell::sync::Lazy as once_lazy;
pub use reqwest::blocking::Client;
pub use urlencoding::encode;
