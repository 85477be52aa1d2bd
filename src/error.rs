use std::path::{Path, PathBuf};

pub type SoundBoardResult<T> = Result<T, AssetError>;

/// Failures while loading startup assets. All of them are fatal.
#[derive(thiserror::Error, Debug)]
pub enum AssetError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot decode image {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("cannot decode audio {path}: {source}")]
    Audio {
        path: PathBuf,
        #[source]
        source: rodio::decoder::DecoderError,
    },

    #[error("font error in {path}: {msg}")]
    Font { path: PathBuf, msg: String },
}

impl AssetError {
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn font(path: impl AsRef<Path>, msg: impl Into<String>) -> Self {
        Self::Font {
            path: path.as_ref().to_path_buf(),
            msg: msg.into(),
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. }
            | Self::Image { path, .. }
            | Self::Audio { path, .. }
            | Self::Font { path, .. } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_file() {
        let err = AssetError::io(
            "audio/miu.mp3",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        let text = err.to_string();
        assert!(text.contains("audio/miu.mp3"));
        assert!(text.contains("gone"));
        assert_eq!(err.path(), Path::new("audio/miu.mp3"));
    }

    #[test]
    fn font_errors_keep_their_message() {
        let err = AssetError::font("fonts/labelFont.fnt", "missing common line");
        assert!(err.to_string().starts_with("font error in fonts/labelFont.fnt"));
        assert!(err.to_string().contains("missing common line"));
    }
}
