//! Image preprocessing
//!
//! Uploads are decoded and normalized in [`decode`], then one of four canned
//! filters is applied by [`apply`]. Every filter keeps the image's width and
//! height; only the channel layout may change:
//!
//! | Option      | Output channels          |
//! |-------------|--------------------------|
//! | `None`      | same as input            |
//! | `Grayscale` | 1                        |
//! | `Threshold` | 1, values only 0 or 255  |
//! | `Blur`      | same as input            |

mod decode;
mod filters;

pub use decode::{channel_count, decode_upload, encode_png, ACCEPTED_EXTENSIONS};
pub use filters::{gaussian_blur_5x5, otsu_binarize};

use std::fmt;
use std::str::FromStr;

use image::DynamicImage;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SnapscribeError};

/// Filter applied to an upload before it is displayed (and, depending on
/// configuration, before it is recognized).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub enum PreprocessOption {
    #[default]
    None,
    Grayscale,
    Threshold,
    Blur,
}

impl PreprocessOption {
    pub const ALL: [PreprocessOption; 4] = [
        PreprocessOption::None,
        PreprocessOption::Grayscale,
        PreprocessOption::Threshold,
        PreprocessOption::Blur,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Grayscale => "Grayscale",
            Self::Threshold => "Threshold",
            Self::Blur => "Blur",
        }
    }
}

impl fmt::Display for PreprocessOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PreprocessOption {
    type Err = SnapscribeError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|option| option.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                SnapscribeError::Validation(format!(
                    "Unknown preprocessing option '{trimmed}', expected one of None, Grayscale, Threshold, Blur"
                ))
            })
    }
}

/// Apply `option` to `image`, returning a new image of the same dimensions.
pub fn apply(image: &DynamicImage, option: PreprocessOption) -> DynamicImage {
    match option {
        PreprocessOption::None => image.clone(),
        PreprocessOption::Grayscale => DynamicImage::ImageLuma8(image.to_luma8()),
        PreprocessOption::Threshold => {
            DynamicImage::ImageLuma8(otsu_binarize(&image.to_luma8()))
        }
        PreprocessOption::Blur => gaussian_blur_5x5(image),
    }
}
