use crate::common::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Png,
    #[serde(alias = "jpeg")]
    Jpg,
    Bmp,
}

impl OutputFormat {
    #[doc = "Image container format handed to the encoder"]
    pub fn to_image_format(self) -> ImageFormat {
        match self {
            OutputFormat::Png => ImageFormat::Png,
            OutputFormat::Jpg => ImageFormat::Jpeg,
            OutputFormat::Bmp => ImageFormat::Bmp,
        }
    }
}
