use std::io;

/// All error types for the mesh-forge generator.
#[derive(thiserror::Error, Debug)]
pub enum MeshForgeError {
    #[error("Generation error: {0}")]
    Generate(String),
    #[error("Output error: {0}")]
    Output(String),
    #[error("Validation error: {0}")]
    Validation(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MeshForgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_strings() {
        let e = MeshForgeError::Generate("bad shape".into());
        assert_eq!(e.to_string(), "Generation error: bad shape");

        let e = MeshForgeError::Output("disk full".into());
        assert_eq!(e.to_string(), "Output error: disk full");

        let e = MeshForgeError::Validation("index out of range".into());
        assert_eq!(e.to_string(), "Validation error: index out of range");
    }

    #[test]
    fn from_io_error() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file missing");
        let e: MeshForgeError = io_err.into();
        assert!(matches!(e, MeshForgeError::Io(_)));
        assert!(e.to_string().contains("file missing"));
    }
}
